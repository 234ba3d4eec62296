/// Filesystem adapters for file I/O operations
mod file_reader;
mod file_writer;
mod relation_row;

pub use file_reader::FileSystemReader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use relation_row::RelationRow;
