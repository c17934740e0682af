/// How far extractors descend when collecting definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WalkMode {
    /// Class bodies own their methods: file-level `functions` skip anything
    /// inside a class, a class skips its nested classes' methods, and
    /// `exports` only lists module-scope names.
    #[default]
    Scoped,
    /// Unbounded subtree walk. Methods are also reported as bare functions
    /// and nested definitions are exported.
    Legacy,
}

/// Configuration for a single extraction run.
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    pub walk: WalkMode,
}

impl ExtractOptions {
    pub fn legacy() -> Self {
        Self {
            walk: WalkMode::Legacy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_scoped() {
        assert_eq!(ExtractOptions::default().walk, WalkMode::Scoped);
        assert_eq!(ExtractOptions::legacy().walk, WalkMode::Legacy);
    }
}
