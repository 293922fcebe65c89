use crate::shared::Result;
use std::path::Path;

/// BomReader port for loading the BOM document
///
/// This port abstracts the file system access needed to read the
/// generated BOM before it is encoded and uploaded.
pub trait BomReader {
    /// Reads the BOM at `path` as text
    ///
    /// Lines are joined with `\n`, so CRLF line endings are normalized and
    /// a trailing newline is dropped. An empty file yields an empty string.
    ///
    /// # Errors
    /// Returns `PublishError::FileRead` if:
    /// - The file does not exist or is not a regular file
    /// - The file cannot be read due to permissions or I/O errors
    /// - The content is not valid UTF-8
    fn read_bom(&self, path: &Path) -> Result<String>;
}
