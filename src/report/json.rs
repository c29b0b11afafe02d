use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::info;

use crate::error::{Result, SarifError};

/// Render a value as JSON, pretty-printed (2-space indent) or compact
pub fn render<T: Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

/// Read a file into a string
pub fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| SarifError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse JSON text, attributing errors to `path`
pub fn parse<T: DeserializeOwned>(path: &Path, content: &str) -> Result<T> {
    serde_json::from_str(content).map_err(|source| SarifError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize fully, then overwrite `path`. Nothing is written if
/// serialization fails.
pub fn write<T: Serialize>(path: &Path, value: &T, pretty: bool) -> Result<()> {
    let output = render(value, pretty).map_err(SarifError::Serialize)?;
    std::fs::write(path, output).map_err(|source| SarifError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Report written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pretty_uses_two_space_indent() {
        let out = render(&json!({"a": 1}), true).unwrap();
        assert_eq!(out, "{\n  \"a\": 1\n}");
    }

    #[test]
    fn compact_has_no_whitespace() {
        assert_eq!(render(&json!({"a": [1, 2]}), false).unwrap(), r#"{"a":[1,2]}"#);
    }

    #[test]
    fn read_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, SarifError::Read { .. }));
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.json");
        let err = write(&path, &json!({}), true).unwrap_err();
        assert!(matches!(err, SarifError::Write { .. }));
    }
}
