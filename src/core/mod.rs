/// Core functionality modules
///
/// Contains the main logic: prefix matching, argument resolution,
/// and the jump itself.

pub mod matcher;
pub mod navigator;
pub mod resolver;

pub use matcher::{find_match, find_subdirectory_with_prefix};
pub use navigator::Navigator;
pub use resolver::{resolve_relative, Target};
