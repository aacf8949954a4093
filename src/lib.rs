/// nearest library
///
/// Keeps a most-recently-used list of directories and resolves a short
/// name prefix to the newest matching one.

pub mod config;
pub mod core;
pub mod error;
pub mod shell;
pub mod store;

// Re-exports for convenience
pub use config::Config;
pub use crate::core::Navigator;
pub use error::{NearestError, Result};
pub use store::{DirList, ListFile};
