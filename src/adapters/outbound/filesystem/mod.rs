/// Filesystem and stdout adapters for presenting rendered frames
mod file_writer;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
