use crate::ports::outbound::BomReader;
use crate::shared::error::PublishError;
use crate::shared::Result;
use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::Path;

/// Maximum BOM size accepted for upload (100 MB)
const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// FileSystemReader adapter for reading the BOM from the file system
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemReader {
    /// Reads a regular file and joins its lines with `\n`.
    fn read_joined_lines(&self, path: &Path) -> std::io::Result<String> {
        let metadata = fs::metadata(path)?;

        if !metadata.is_file() {
            return Err(std::io::Error::other(format!(
                "{} is not a regular file",
                path.display()
            )));
        }

        let file_size = metadata.len();
        if file_size > MAX_FILE_SIZE {
            return Err(std::io::Error::other(format!(
                "{} is too large ({} bytes). Maximum allowed size is {} bytes.",
                path.display(),
                file_size,
                MAX_FILE_SIZE
            )));
        }

        let mut content = String::new();
        BufReader::new(File::open(path)?).read_to_string(&mut content)?;
        Ok(join_lines(&content))
    }
}

/// Splits on `\r\n`, `\r` or `\n` and joins with `\n`.
/// A final terminator does not start another line.
fn join_lines(content: &str) -> String {
    let mut joined = content.replace("\r\n", "\n").replace('\r', "\n");
    if joined.ends_with('\n') {
        joined.pop();
    }
    joined
}

impl BomReader for FileSystemReader {
    fn read_bom(&self, path: &Path) -> Result<String> {
        self.read_joined_lines(path).map_err(|e| {
            PublishError::FileRead {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
