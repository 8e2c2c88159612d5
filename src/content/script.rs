//! Script execution
//!
//! Runs an external program and captures its standard output as response
//! content. The spawn is scoped: stdin is closed, stdout is piped, stderr is
//! inherited by the server process (it is never part of the response), and
//! the child is reaped on every exit path. `kill_on_drop` covers the timeout
//! path so an overrunning script cannot linger as a zombie.

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;

use crate::error::DispatchError;

/// Execute `script` and return its captured stdout.
///
/// With an `interpreter` the script is passed as its first argument;
/// otherwise the file is executed directly (exec bit + shebang). A
/// `timeout_secs` of 0 leaves execution unbounded; any other value kills
/// the script when it overruns.
///
/// Non-zero exit is a failure even when stdout is non-empty.
pub async fn run(
    script: &Path,
    request_path: &str,
    interpreter: Option<&str>,
    timeout_secs: u64,
) -> Result<Vec<u8>, DispatchError> {
    let mut command = match interpreter {
        Some(program) => {
            let mut command = Command::new(program);
            command.arg(script);
            command
        }
        None => Command::new(script),
    };
    command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .kill_on_drop(true);

    let child = command
        .spawn()
        .map_err(|e| failure(request_path, e.to_string()))?;

    let waited = child.wait_with_output();
    let output = if timeout_secs > 0 {
        match tokio::time::timeout(Duration::from_secs(timeout_secs), waited).await {
            Ok(result) => result.map_err(|e| failure(request_path, e.to_string()))?,
            Err(_) => {
                return Err(failure(
                    request_path,
                    format!("timed out after {timeout_secs}s"),
                ))
            }
        }
    } else {
        waited
            .await
            .map_err(|e| failure(request_path, e.to_string()))?
    };

    if !output.status.success() {
        return Err(failure(
            request_path,
            format!("exit status {}", output.status),
        ));
    }

    Ok(output.stdout)
}

fn failure(request_path: &str, reason: String) -> DispatchError {
    DispatchError::ExecutionFailure {
        path: request_path.to_string(),
        reason,
    }
}
