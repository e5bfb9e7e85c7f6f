use std::path::Path;

use anyhow::{Context, Result, anyhow};
use url::Url;

/// File name for titles, falling back to the full path.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}

/// Extension of `path` with its leading dot, exactly as written, or empty.
///
/// Readers filter their inputs by extension, so the filter has to be the
/// file's own suffix when the format was forced.
pub fn dotted_extension(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}

/// Fail early with the OS error when `path` cannot be read.
pub fn ensure_readable(path: &Path) -> Result<()> {
    std::fs::File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    Ok(())
}

/// `file://` URL for an existing file.
///
/// Readers expand glob characters (`[`, `*`, `?`) in plain path strings but
/// take URLs literally, so a file named `sales[2024].csv` is read as itself.
pub fn file_url(path: &Path) -> Result<Url> {
    let absolute = std::fs::canonicalize(path)
        .with_context(|| format!("Failed to resolve {}", path.display()))?;
    Url::from_file_path(&absolute)
        .map_err(|()| anyhow!("Cannot express {} as a file URL", absolute.display()))
}
