/// Storage module for nearest
///
/// Handles the on-disk directory list: a small CSV file rewritten
/// on every successful jump.

pub mod list_file;
pub mod models;

pub use list_file::ListFile;
pub use models::DirList;
