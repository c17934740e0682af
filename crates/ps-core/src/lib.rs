mod import;
mod record;
mod span;
mod visibility;

pub use import::ImportRecord;
pub use record::{
    ClassRecord, ExportKind, ExportRecord, FunctionRecord, Parameter, PropertyRecord,
    StructuralRecord,
};
pub use span::LineSpan;
pub use visibility::is_public;
