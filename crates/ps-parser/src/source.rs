use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ParserError;

/// Read a source file, returning its absolute path and text.
///
/// Invalid UTF-8 sequences are replaced with U+FFFD rather than rejected.
pub fn read_source(path: &Path) -> Result<(PathBuf, String), ParserError> {
    if !path.exists() {
        return Err(ParserError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let unreadable = |source| ParserError::Unreadable {
        path: path.to_path_buf(),
        source,
    };
    let absolute = path.canonicalize().map_err(unreadable)?;
    let bytes = fs::read(&absolute).map_err(unreadable)?;
    let text = String::from_utf8_lossy(&bytes).into_owned();
    Ok((absolute, text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_text_and_resolves_path() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("mod.py");
        fs::write(&file, "x = 1\n").unwrap();

        let (abs, text) = read_source(&file).unwrap();
        assert!(abs.is_absolute());
        assert_eq!(text, "x = 1\n");
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("latin.py");
        fs::write(&file, b"s = '\xff'\n").unwrap();

        let (_, text) = read_source(&file).unwrap();
        assert_eq!(text, "s = '\u{FFFD}'\n");
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_source(&dir.path().join("nope.py")).unwrap_err();
        assert!(matches!(err, ParserError::NotFound { .. }));
    }

    #[test]
    fn directory_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_source(dir.path()).unwrap_err();
        assert!(matches!(err, ParserError::Unreadable { .. }));
    }
}
