pub mod error;
mod assemble;
mod options;
mod source;
mod visitor;

pub use assemble::{extract_file, extract_files, extract_source};
pub use options::{ExtractOptions, WalkMode};
pub use source::read_source;
