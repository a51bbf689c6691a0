use crate::ports::outbound::{DocumentReader, DocumentSource};
use crate::shared::error::EnrichError;
use crate::shared::Result;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Maximum document size for security (100 MB)
const MAX_DOCUMENT_SIZE: u64 = 100 * 1024 * 1024;

/// FileSystemReader adapter for reading SBOM documents
///
/// This adapter implements the DocumentReader port, reading the document
/// either from a file on disk or from standard input.
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
    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate file is a regular file
    fn safe_read_file(&self, path: &Path) -> Result<String> {
        let metadata = fs::symlink_metadata(path)
            .map_err(|e| anyhow::anyhow!("Failed to read file metadata: {}", e))?;

        if metadata.is_symlink() {
            anyhow::bail!(
                "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
                path.display()
            );
        }

        if !metadata.is_file() {
            anyhow::bail!("{} is not a regular file", path.display());
        }

        let file_size = metadata.len();
        if file_size > MAX_DOCUMENT_SIZE {
            anyhow::bail!(
                "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
                path.display(),
                file_size,
                MAX_DOCUMENT_SIZE
            );
        }

        fs::read_to_string(path).map_err(|e| anyhow::anyhow!("Failed to read file: {}", e))
    }

    fn read_stdin(&self) -> Result<String> {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| EnrichError::SbomReadError {
                source_name: "<stdin>".to_string(),
                details: e.to_string(),
            })?;
        Ok(buffer)
    }
}

impl DocumentReader for FileSystemReader {
    fn read_document(&self, source: &DocumentSource) -> Result<String> {
        match source {
            DocumentSource::Stdin => self.read_stdin(),
            DocumentSource::File(path) => {
                if !path.exists() {
                    return Err(EnrichError::SbomNotFound {
                        path: path.clone(),
                        suggestion: format!(
                            "SBOM file \"{}\" does not exist.\n   \
                             Please pass the path to a CycloneDX JSON document, or \"-\" to read from standard input.",
                            path.display()
                        ),
                    }
                    .into());
                }

                self.safe_read_file(path).map_err(|e| {
                    EnrichError::SbomReadError {
                        source_name: path.display().to_string(),
                        details: e.to_string(),
                    }
                    .into()
                })
            }
        }
    }
}
