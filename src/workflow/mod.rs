pub mod report_flow;
pub mod save_ctx;

pub use report_flow::{PendingSave, ReportAssembler, SaveAttempt};
pub use save_ctx::SaveCtx;
