use serde::{Deserialize, Serialize};

/// One normalised import edge.
///
/// Direct imports (`import a.b as c`) and from-imports (`from .a import b`)
/// share this shape. A wildcard from-import collapses to `imports == ["*"]`
/// with `default_import == Some("*")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRecord {
    /// Module path, dot-prefixed once per relative level.
    pub from: String,
    pub imports: Vec<String>,
    /// Python has no type-only imports; always false.
    pub is_type_only: bool,
    pub default_import: Option<String>,
}

impl ImportRecord {
    /// `import module [as alias]`: the bound local name is both the sole
    /// import and the default import.
    pub fn direct(module: impl Into<String>, bound: impl Into<String>) -> Self {
        let bound = bound.into();
        Self {
            from: module.into(),
            imports: vec![bound.clone()],
            is_type_only: false,
            default_import: Some(bound),
        }
    }

    /// `from module import names`. A `*` anywhere in `names` wins.
    pub fn from_names(module: impl Into<String>, names: Vec<String>) -> Self {
        let wildcard = names.iter().any(|n| n == "*");
        let (imports, default_import) = if wildcard {
            (vec!["*".to_string()], Some("*".to_string()))
        } else {
            (names, None)
        };
        Self {
            from: module.into(),
            imports,
            is_type_only: false,
            default_import,
        }
    }
}
