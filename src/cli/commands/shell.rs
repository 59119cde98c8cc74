//! Shell completions generation.
//!
//! Generates shell completion scripts for bash, zsh, fish, powershell, and
//! elvish.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::FocusError;

/// Generate shell completions for the named shell.
///
/// # Errors
///
/// Returns an error if the shell is unknown.
pub fn completions(shell: &str) -> Result<String, FocusError> {
    let shell = shell_from_str(shell)
        .ok_or_else(|| FocusError::Config(format!("Unknown shell: {shell}")))?;

    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "focusflow", &mut buf);

    String::from_utf8(buf).map_err(|e| FocusError::Config(format!("UTF-8 error: {e}")))
}

/// Get shell from string name.
fn shell_from_str(s: &str) -> Option<Shell> {
    match s.to_lowercase().as_str() {
        "bash" => Some(Shell::Bash),
        "zsh" => Some(Shell::Zsh),
        "fish" => Some(Shell::Fish),
        "powershell" | "ps" | "pwsh" => Some(Shell::PowerShell),
        "elvish" => Some(Shell::Elvish),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_shells() {
        assert_eq!(shell_from_str("bash"), Some(Shell::Bash));
        assert_eq!(shell_from_str("ZSH"), Some(Shell::Zsh));
        assert_eq!(shell_from_str("pwsh"), Some(Shell::PowerShell));
        assert_eq!(shell_from_str("tcsh"), None);
    }

    #[test]
    fn test_generates_script() {
        let script = completions("bash").unwrap();
        assert!(script.contains("focusflow"));
    }

    #[test]
    fn test_unknown_shell_errors() {
        assert!(completions("tcsh").is_err());
    }
}
