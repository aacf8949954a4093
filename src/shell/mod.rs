/// Shell integration module
///
/// Handles shell detection and the `cdn` wrapper that turns a printed
/// path into an actual directory change.

pub mod init;
pub mod shell_detector;

pub use init::init_script;
pub use shell_detector::{Shell, ShellDetector};
