use crate::shared::Result;
use std::path::PathBuf;

/// Where the SBOM document is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    /// A file on disk
    File(PathBuf),
    /// Standard input, selected with "-" on the command line
    Stdin,
}

impl DocumentSource {
    /// Parses a CLI argument: "-" selects stdin, anything else is a path
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            DocumentSource::Stdin
        } else {
            DocumentSource::File(PathBuf::from(arg))
        }
    }

    /// Human-readable name for error messages
    pub fn display_name(&self) -> String {
        match self {
            DocumentSource::File(path) => path.display().to_string(),
            DocumentSource::Stdin => "<stdin>".to_string(),
        }
    }
}

/// DocumentReader port for reading the raw SBOM document
///
/// This port abstracts file system and stdin access so the use case
/// never touches I/O directly.
pub trait DocumentReader {
    /// Reads the complete SBOM document as a string
    ///
    /// # Errors
    /// Returns an error if the source does not exist or cannot be read.
    /// A read failure here is fatal for the whole run; it is not part of
    /// the per-component error handling.
    fn read_document(&self, source: &DocumentSource) -> Result<String>;
}
