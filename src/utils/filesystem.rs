//! File system utility functions

use anyhow::{Context, Result};
use std::path::Path;

/// Ensure the parent directory of `path` exists, creating it if necessary
pub fn ensure_parent_directory(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    Ok(())
}
