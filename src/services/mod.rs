//! 业务能力层

pub mod notifier;

pub use notifier::{LogSink, MemorySink, Notice, NoticeKind, NoticeSink, SaveNotifier};
