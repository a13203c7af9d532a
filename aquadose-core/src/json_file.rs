use crate::error::AquadoseError;
use serde::{de::DeserializeOwned, Serialize};
use std::{fs, io, path::Path};

/// Reads and parses a JSON file. A file that does not exist yet is `None`.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, AquadoseError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(AquadoseError::FileIO(path.display().to_string(), e)),
    };
    let value = serde_json::from_str(&content)
        .map_err(|e| AquadoseError::JsonParsing(path.display().to_string(), e))?;
    Ok(Some(value))
}

/// Writes `value` as pretty JSON, creating parent directories as needed.
pub(crate) fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), AquadoseError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| AquadoseError::FileIO(parent.display().to_string(), e))?;
    }
    let content = serde_json::to_string_pretty(value)?;
    fs::write(path, content).map_err(|e| AquadoseError::FileIO(path.display().to_string(), e))
}
