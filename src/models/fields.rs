use serde::{Deserialize, Serialize};

/// E2B 空值原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NullFlavor {
    /// 无信息
    Ni,
    /// 已屏蔽
    Msk,
    /// 未知
    Unk,
    /// 不适用
    Na,
    /// 已询问但未知
    Asku,
    /// 未询问
    Nask,
    /// 负无穷
    Ninf,
    /// 正无穷
    Pinf,
}

/// 可以用空值原因代替取值的字段
///
/// 显示键名为 `value` / `nullFlavor`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Nullable<T> {
    pub value: Option<T>,
    pub null_flavor: Option<NullFlavor>,
}

impl<T> Nullable<T> {
    pub fn value(value: T) -> Self {
        Self {
            value: Some(value),
            null_flavor: None,
        }
    }

    pub fn flavor(null_flavor: NullFlavor) -> Self {
        Self {
            value: None,
            null_flavor: Some(null_flavor),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_none() && self.null_flavor.is_none()
    }
}

impl<T> Default for Nullable<T> {
    fn default() -> Self {
        Self {
            value: None,
            null_flavor: None,
        }
    }
}
