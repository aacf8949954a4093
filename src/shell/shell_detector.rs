/// Shell detection logic
///
/// Detects which shell the user is running so `--init` can print the
/// matching wrapper without being told.

use crate::error::{NearestError, Result};
use std::env;
use std::str::FromStr;

/// Supported shells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

impl Shell {
    pub const ALL: [Shell; 4] = [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell];

    /// Get the shell name as a string
    pub fn name(&self) -> &str {
        match self {
            Shell::Bash => "bash",
            Shell::Zsh => "zsh",
            Shell::Fish => "fish",
            Shell::PowerShell => "powershell",
        }
    }
}

impl std::fmt::Display for Shell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Shell {
    type Err = NearestError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "bash" => Ok(Shell::Bash),
            "zsh" => Ok(Shell::Zsh),
            "fish" => Ok(Shell::Fish),
            "powershell" | "pwsh" => Ok(Shell::PowerShell),
            other => Err(NearestError::UnsupportedShell(other.to_string())),
        }
    }
}

/// Shell detector
pub struct ShellDetector;

impl ShellDetector {
    /// Detect the current shell
    ///
    /// Attempts to detect the shell from environment variables.
    ///
    /// # Returns
    /// * `Ok(Shell)` - The detected shell
    /// * `Err(NearestError)` - If shell cannot be detected
    pub fn detect() -> Result<Shell> {
        // Check SHELL environment variable
        if let Ok(shell_path) = env::var("SHELL") {
            return Self::from_shell_path(&shell_path);
        }

        // Check for PowerShell
        if env::var("PSModulePath").is_ok() {
            return Ok(Shell::PowerShell);
        }

        Err(NearestError::UnsupportedShell(
            "unknown (set $SHELL or pass the shell name to --init)".to_string(),
        ))
    }

    /// Map a `$SHELL` value like `/usr/bin/zsh` to a shell
    pub fn from_shell_path(shell_path: &str) -> Result<Shell> {
        let shell_name = shell_path.rsplit('/').next().unwrap_or("");
        shell_name.parse()
    }
}
