pub mod fields;
pub mod loaders;
pub mod payload;
pub mod report;
pub mod section;
pub mod sections;

pub use fields::{NullFlavor, Nullable};
pub use loaders::{load_draft, parse_draft, ReportDraft};
pub use payload::{ReportId, SectionPayload};
pub use report::ReportDocument;
pub use section::Section;
