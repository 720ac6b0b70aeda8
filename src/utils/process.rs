use crate::utils::error::{MaliceError, Result};
use std::error::Error as _;
use tokio::process::Command;

/// Runs a program to completion and returns its standard output.
///
/// A non-zero exit becomes [`MaliceError::CommandFailed`] carrying everything
/// the program printed, so [`log_error`] can report it.
pub async fn run_captured(program: &str, args: &[&str]) -> Result<String> {
    let command = std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ");
    tracing::debug!("Running `{}`", command);

    let output = Command::new(program).args(args).output().await?;
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();

    if !output.status.success() {
        let mut combined = stdout;
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        return Err(MaliceError::CommandFailed {
            command,
            status: output.status,
            output: combined,
        });
    }

    Ok(stdout)
}

/// Logs an error with its source chain, plus captured output of failed commands.
pub fn log_error(error: &MaliceError) {
    let mut chain = vec![error.to_string()];
    let mut source = error.source();
    while let Some(cause) = source {
        chain.push(cause.to_string());
        source = cause.source();
    }
    tracing::error!("{}", chain.join(": caused by: "));

    if let MaliceError::CommandFailed { output, .. } = error {
        let output = output.trim();
        if !output.is_empty() {
            tracing::error!("Output:  \n{}", output);
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_successful_command_output() {
        let out = run_captured("sh", &["-c", "echo hello"]).await.unwrap();
        assert_eq!(out.trim(), "hello");
    }

    #[tokio::test]
    async fn test_failed_command_keeps_output() {
        let err = run_captured("sh", &["-c", "echo boom >&2; exit 3"])
            .await
            .unwrap_err();
        match &err {
            MaliceError::CommandFailed { status, output, .. } => {
                assert_eq!(status.code(), Some(3));
                assert_eq!(output.trim(), "boom");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        log_error(&err);
    }

    #[tokio::test]
    async fn test_missing_program_is_io_error() {
        let err = run_captured("malice-no-such-program", &[]).await.unwrap_err();
        assert!(matches!(err, MaliceError::IoError(_)));
    }
}
