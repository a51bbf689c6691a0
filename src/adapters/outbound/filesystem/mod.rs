pub mod document_reader;
pub mod file_writer;

pub use document_reader::FileSystemReader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
