use std::path::Path;

use walkdir::WalkDir;

use crate::errors::{PathKind, SamplerError};
use crate::types::FileName;

/// Validate that `path` names an existing regular file.
pub fn expect_file(path: &Path) -> Result<(), SamplerError> {
    if !path.exists() {
        return Err(SamplerError::NotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(SamplerError::InvalidPathKind {
            path: path.to_path_buf(),
            expected: PathKind::File,
        });
    }
    Ok(())
}

/// Validate that `path` names an existing directory.
pub fn expect_dir(path: &Path) -> Result<(), SamplerError> {
    if !path.exists() {
        return Err(SamplerError::NotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(SamplerError::InvalidPathKind {
            path: path.to_path_buf(),
            expected: PathKind::Directory,
        });
    }
    Ok(())
}

/// List candidate document file names in `dir`, sorted ascending
/// lexicographically, with every name in `ignore_files` removed.
///
/// The listing is non-recursive and skips subdirectories. Ignore entries
/// that match no actual file are silently skipped. Ignore entries must
/// be bare file names; anything path-like is rejected.
pub fn list_documents(dir: &Path, ignore_files: &[FileName]) -> Result<Vec<FileName>, SamplerError> {
    expect_dir(dir)?;
    for entry in ignore_files {
        validate_ignore_entry(entry)?;
    }

    let mut names: Vec<FileName> = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|err| SamplerError::Io(err.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_str().ok_or_else(|| {
            SamplerError::InvalidArgument(format!(
                "directory entry {:?} is not valid UTF-8",
                entry.file_name()
            ))
        })?;
        names.push(name.to_string());
    }
    names.sort();
    names.retain(|name| !ignore_files.contains(name));
    Ok(names)
}

fn validate_ignore_entry(entry: &str) -> Result<(), SamplerError> {
    if entry.is_empty() {
        return Err(SamplerError::InvalidArgument(
            "ignore entries must be non-empty file names".to_string(),
        ));
    }
    if entry.contains('/') || entry.contains('\\') {
        return Err(SamplerError::InvalidArgument(format!(
            "ignore entry `{entry}` must be a bare file name, not a path"
        )));
    }
    Ok(())
}
