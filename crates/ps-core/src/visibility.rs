/// Leading underscore marks a name as non-public, dunders included.
pub fn is_public(name: &str) -> bool {
    !name.starts_with('_')
}
