use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

const PATTERN_EXTENSION: &str = "png";

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("pattern directory {path} unavailable: {source}")]
    Unavailable { path: PathBuf, source: io::Error },
}

impl PatternError {
    fn unavailable(dir: &Path, source: io::Error) -> Self {
        PatternError::Unavailable {
            path: dir.to_path_buf(),
            source,
        }
    }
}

/// List the stem names of pattern images available to the customizer.
///
/// A missing directory is created and yields an empty list. Filesystem
/// failures surface as [`PatternError::Unavailable`]; callers rendering the
/// customizer page degrade that to an empty pattern list.
pub fn list_patterns(dir: &Path) -> Result<Vec<String>, PatternError> {
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| PatternError::unavailable(dir, e))?;
        return Ok(Vec::new());
    }

    let mut stems = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| PatternError::unavailable(dir, e))? {
        let entry = entry.map_err(|e| PatternError::unavailable(dir, e))?;
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some(PATTERN_EXTENSION) {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
            stems.push(stem.to_string());
        }
    }
    stems.sort();
    Ok(stems)
}
