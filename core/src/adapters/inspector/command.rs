//! Running external tools.

use std::io;
use std::process::{ExitStatus, Stdio};

use tokio::process::Command;
use tracing::debug;

use crate::error::{Error, Result};

/// Captured result of a finished tool run.
pub(super) struct ToolOutput {
    pub status: ExitStatus,
    pub stdout: String,
}

/// Run `program` with `args` and wait for it to exit.
///
/// Only a failure to start the program is an error; a non-zero exit status
/// is returned to the caller, since lsof uses it for "nothing matched".
pub(super) async fn run(program: &str, args: &[&str]) -> Result<ToolOutput> {
    debug!(program = program, args = ?args, "Running tool");

    let output = Command::new(program)
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .output()
        .await
        .map_err(|e| spawn_error(program, e))?;

    Ok(ToolOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
    })
}

fn spawn_error(program: &str, e: io::Error) -> Error {
    match e.kind() {
        io::ErrorKind::NotFound => Error::ToolNotFound(program.to_string()),
        io::ErrorKind::PermissionDenied => {
            Error::PermissionDenied(format!("Cannot run {}: {}", program, e))
        }
        _ => Error::CommandFailed(format!("Failed to run {}: {}", program, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_tool() {
        let result = run("/nonexistent/portscout-test-tool", &[]).await;
        assert!(matches!(result, Err(Error::ToolNotFound(_))));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_captures_stdout_and_status() {
        let output = run("sh", &["-c", "echo hello; exit 1"]).await.unwrap();
        assert_eq!(output.stdout, "hello\n");
        assert!(!output.status.success());
    }
}
