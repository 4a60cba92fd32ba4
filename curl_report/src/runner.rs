//! Sequential subprocess execution through `sh -c`.

use std::process::Command;

/// Everything a command produced. Only `stdout` reaches the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code; `None` when the process could not be spawned or was killed by a signal.
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn succeeded(&self) -> bool {
        self.status == Some(0)
    }
}

/// Run `command` and block until it exits. Spawn failures are folded into the output.
pub fn run_command(command: &str) -> CommandOutput {
    match Command::new("sh").arg("-c").arg(command).output() {
        Ok(output) => CommandOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        },
        Err(e) => CommandOutput {
            status: None,
            stdout: String::new(),
            stderr: format!("failed to spawn `{}`: {}", command, e),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_stdout_and_status() {
        let out = run_command("printf 'hello\\n'");
        assert_eq!(out.stdout, "hello\n");
        assert_eq!(out.status, Some(0));
        assert!(out.succeeded());
    }

    #[test]
    fn captures_failure_without_panicking() {
        let out = run_command("echo oops >&2; exit 3");
        assert_eq!(out.status, Some(3));
        assert_eq!(out.stderr, "oops\n");
        assert!(out.stdout.is_empty());
        assert!(!out.succeeded());
    }
}
