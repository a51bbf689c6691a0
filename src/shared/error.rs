use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the enriched document was written
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (read, decode, encode or write failure)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for SBOM enrichment.
///
/// These cover the fatal, whole-run failures: reading and decoding the
/// input document and writing the enriched output. Per-component lookup
/// failures are absorbed inside the enrichment engine and never surface
/// through this type.
#[derive(Debug, Error)]
pub enum EnrichError {
    #[error("SBOM file not found: {path}\n\n💡 Hint: {suggestion}")]
    SbomNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to read SBOM document from {source_name}\nDetails: {details}")]
    SbomReadError {
        source_name: String,
        details: String,
    },

    #[error("Failed to decode SBOM document: {details}\n\n💡 Hint: Only CycloneDX JSON documents are supported")]
    SbomDecodeError { details: String },

    #[error("Failed to encode enriched SBOM document: {details}")]
    SbomEncodeError { details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}
