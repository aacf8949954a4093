/// Shell wrapper generation
///
/// A child process can't change its parent's directory, so the shell needs
/// a small `cdn` function that runs nearest and then `cd`s into the result.

use crate::shell::Shell;
use std::path::Path;

/// Wrapper templates embedded at compile time
const BASH_WRAPPER: &str = include_str!("../../hooks/bash.sh");
const ZSH_WRAPPER: &str = include_str!("../../hooks/zsh.sh");
const FISH_WRAPPER: &str = include_str!("../../hooks/fish.fish");
const POWERSHELL_WRAPPER: &str = include_str!("../../hooks/powershell.ps1");

const BIN_PLACEHOLDER: &str = "{{NEAREST_BIN}}";

/// Wrapper function source for `shell`, calling the binary at `binary`
pub fn init_script(shell: Shell, binary: &Path) -> String {
    let binary = binary.to_string_lossy();
    template(shell).replace(BIN_PLACEHOLDER, &quote_inner(shell, &binary))
}

fn template(shell: Shell) -> &'static str {
    match shell {
        Shell::Bash => BASH_WRAPPER,
        Shell::Zsh => ZSH_WRAPPER,
        Shell::Fish => FISH_WRAPPER,
        Shell::PowerShell => POWERSHELL_WRAPPER,
    }
}

// Escape for the inside of a double-quoted string in `shell`
fn quote_inner(shell: Shell, raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match (shell, c) {
            (Shell::Bash | Shell::Zsh, '"' | '\\' | '$' | '`') => {
                out.push('\\');
                out.push(c);
            }
            (Shell::Fish, '"' | '\\' | '$') => {
                out.push('\\');
                out.push(c);
            }
            (Shell::PowerShell, '"' | '$' | '`') => {
                out.push('`');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}
