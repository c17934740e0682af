use std::path::{Path, PathBuf};

use ps_core::StructuralRecord;
use rayon::prelude::*;

use crate::error::ParserError;
use crate::options::ExtractOptions;
use crate::source::read_source;
use crate::visitor::{
    extract_classes, extract_exports, extract_functions, extract_imports, parse_tree,
    VisitorContext,
};

/// Build the structural record of in-memory source text.
///
/// `path` is recorded verbatim; nothing is read from disk. Unparseable text
/// yields `ParserError::Syntax` and no partial record.
pub fn extract_source(
    path: &Path,
    content: &str,
    options: &ExtractOptions,
) -> Result<StructuralRecord, ParserError> {
    let tree = parse_tree(path, content).inspect_err(|e| {
        tracing::warn!(path = %path.display(), error = %e, "source failed to parse");
    })?;

    let ctx = VisitorContext {
        source: content,
        options,
    };
    let root = tree.root_node();

    let record = StructuralRecord {
        path: path.display().to_string(),
        content: content.to_string(),
        functions: extract_functions(&ctx, root, ""),
        classes: extract_classes(&ctx, root),
        types: Vec::new(),
        imports: extract_imports(&ctx, root),
        exports: extract_exports(&ctx, root),
    };

    tracing::debug!(
        functions = record.functions.len(),
        classes = record.classes.len(),
        imports = record.imports.len(),
        exports = record.exports.len(),
        "extracted"
    );
    Ok(record)
}

/// Read `path` from disk and build its structural record.
///
/// The recorded path is the canonical absolute path; errors carry `path` as
/// given.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn extract_file(path: &Path, options: &ExtractOptions) -> Result<StructuralRecord, ParserError> {
    let (absolute, content) = read_source(path)?;
    extract_source(&absolute, &content, options).map_err(|e| e.with_path(path))
}

/// Extract several files in parallel. Results keep the order of `paths`.
pub fn extract_files(
    paths: &[PathBuf],
    options: &ExtractOptions,
) -> Vec<Result<StructuralRecord, ParserError>> {
    let parent_span = tracing::Span::current();
    paths
        .par_iter()
        .map(|path| {
            let _guard = tracing::debug_span!(parent: &parent_span, "extract_batch_item").entered();
            extract_file(path, options)
        })
        .collect()
}
