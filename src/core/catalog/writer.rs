use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::core::error::WriteError;

/// Fixed file name of the catalog inside the output directory.
pub const CATALOG_FILE_NAME: &str = "messages.xlf";

/// Write the serialized catalog to `<output_dir>/messages.xlf`.
///
/// Any existing catalog is overwritten. The directory is never created.
pub fn write(output_dir: &Path, serialized: &str) -> Result<PathBuf, WriteError> {
    if !output_dir.is_dir() {
        return Err(WriteError::MissingDir(output_dir.to_path_buf()));
    }

    let path = output_dir.join(CATALOG_FILE_NAME);
    fs::write(&path, serialized).map_err(|source| WriteError::Io {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}
