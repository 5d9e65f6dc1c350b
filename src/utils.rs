use crate::errors::GliderTemplateError;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Deletes `path` if it exists. Returns whether a file was removed.
pub fn remove_file_if_exists(path: &Path) -> Result<bool, GliderTemplateError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(GliderTemplateError::CannotRemoveFile {
            filename: path.display().to_string(),
            error: e.to_string(),
        }),
    }
}

/// Fails with `FileNotFound` unless `path` is an existing file.
pub fn require_file(path: &Path) -> Result<(), GliderTemplateError> {
    if !path.is_file() {
        return Err(GliderTemplateError::FileNotFound {
            filename: path.display().to_string(),
        });
    }
    Ok(())
}
