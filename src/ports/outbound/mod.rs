/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, console, etc.).
pub mod document_reader;
pub mod output_presenter;
pub mod package_repository;
pub mod progress_reporter;

pub use document_reader::{DocumentReader, DocumentSource};
pub use output_presenter::OutputPresenter;
pub use package_repository::PackageRepository;
pub use progress_reporter::ProgressReporter;
