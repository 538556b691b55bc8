//! Reading command input from a file or stdin.

use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

use crate::error::InputError;

/// Read the whole input, from `path` when given, otherwise from stdin.
pub fn read_input(path: Option<&Path>) -> Result<String, InputError> {
    let text = match path {
        Some(path) => read_file(path)?,
        None => read_stdin()?,
    };

    if text.trim().is_empty() {
        warn!("Input contained no text");
    }
    Ok(text)
}

pub fn read_file(path: &Path) -> Result<String, InputError> {
    debug!("Reading input from {}", path.display());
    std::fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn read_stdin() -> Result<String, InputError> {
    debug!("Reading input from stdin");
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .map_err(InputError::Stdin)?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "• Send the deck").unwrap();

        let text = read_input(Some(file.path())).unwrap();
        assert_eq!(text, "• Send the deck");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");

        let err = read_input(Some(missing.as_path())).unwrap_err();
        assert!(matches!(err, InputError::Read { .. }));
        assert!(err.to_string().contains("nope.txt"));
    }
}
