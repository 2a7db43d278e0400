use std::process::{Command, ExitStatus, Output, Stdio};

use crate::error::AppError;

/// Runs external programs on behalf of the setup steps
pub trait CommandRunner {
    /// Runs a command with its output captured
    fn run(&mut self, program: &str, args: &[&str]) -> Result<(), AppError>;

    /// Runs a command attached to the terminal so it can prompt the user
    fn run_attached(&mut self, program: &str, args: &[&str]) -> Result<(), AppError>;
}

/// `CommandRunner` backed by `std::process`
#[derive(Debug, Default)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&mut self, program: &str, args: &[&str]) -> Result<(), AppError> {
        let command_line: String = command_line(program, args);
        tracing::debug!(command = %command_line, "running");

        let output: Output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| spawn_error(&command_line, e))?;

        if !output.status.success() {
            let stderr: String = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(exit_error(command_line, output.status, stderr));
        }

        Ok(())
    }

    fn run_attached(&mut self, program: &str, args: &[&str]) -> Result<(), AppError> {
        let command_line: String = command_line(program, args);
        tracing::debug!(command = %command_line, "running attached to terminal");

        // Terminal belongs to the child until it exits
        let status: ExitStatus = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| spawn_error(&command_line, e))?;

        if !status.success() {
            return Err(exit_error(command_line, status, String::new()));
        }

        Ok(())
    }
}

/// Joins program and arguments for messages and logs
pub fn command_line(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<&str>>()
        .join(" ")
}

fn spawn_error(command_line: &str, err: std::io::Error) -> AppError {
    tracing::warn!(command = %command_line, error = %err, "failed to start");
    AppError::Command {
        command: command_line.to_string(),
        reason: err.to_string(),
    }
}

fn exit_error(command_line: String, status: ExitStatus, stderr: String) -> AppError {
    tracing::warn!(command = %command_line, %status, "command failed");
    let reason: String = if stderr.is_empty() {
        status.to_string()
    } else {
        stderr
    };
    AppError::Command {
        command: command_line,
        reason,
    }
}
