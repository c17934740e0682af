use serde::{Deserialize, Serialize};

use crate::import::ImportRecord;

/// A positional parameter of a function signature.
///
/// `optional` is true iff `default_value` holds the source text of a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,
    /// Annotation source text, empty when unannotated.
    #[serde(rename = "type")]
    pub type_name: String,
    pub optional: bool,
    pub default_value: Option<String>,
}

/// A public function or method definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionRecord {
    /// Carries a `ClassName.` prefix when extracted as a method.
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub return_type: String,
    pub is_async: bool,
    pub line_start: usize,
    pub line_end: usize,
    /// Source lines `line_start..=line_end`.
    pub body: String,
}

/// An annotated class-level variable. `optional` means no initializer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub optional: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassRecord {
    pub name: String,
    pub methods: Vec<FunctionRecord>,
    pub properties: Vec<PropertyRecord>,
    pub line_start: usize,
    pub line_end: usize,
}

/// Coarse kind tag of an exported name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportKind {
    Function,
    Class,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ExportKind,
}

/// Structural summary of a single source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuralRecord {
    /// Absolute path of the analysed file.
    pub path: String,
    /// Raw source text.
    pub content: String,
    pub functions: Vec<FunctionRecord>,
    pub classes: Vec<ClassRecord>,
    /// Reserved for type aliases; always empty.
    pub types: Vec<serde_json::Value>,
    pub imports: Vec<ImportRecord>,
    pub exports: Vec<ExportRecord>,
}
