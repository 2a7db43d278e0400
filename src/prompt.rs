use std::{fmt, path::PathBuf};

use colored::Colorize;
use inquire::{Select, Text};

use crate::{
    config::{GitScope, SetupConfig, default_ssh_key_path},
    error::AppError,
    validation::{prompt_until_valid, validate_input_email, validate_input_username},
};

/// Answer to "create an SSH key?"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SshChoice {
    Create,
    Skip,
}

impl fmt::Display for SshChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SshChoice::Create => write!(f, "yes"),
            SshChoice::Skip => write!(f, "no"),
        }
    }
}

/// Answer to "how should commits be signed?"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SigningChoice {
    Disabled,
    Ssh,
}

impl fmt::Display for SigningChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SigningChoice::Disabled => write!(f, "none"),
            SigningChoice::Ssh => write!(f, "SSH"),
        }
    }
}

/// Runs the setup form and returns the collected answers
pub fn run_form() -> Result<SetupConfig, AppError> {
    let default_key_path: PathBuf = default_ssh_key_path()?;

    let scope: GitScope = Select::new(
        &format!("{}", "how do you want to set up git?".blue()),
        vec![GitScope::Global, GitScope::Local],
    )
    .with_help_message("global applies across the system, local to the current repository only")
    .prompt()?;

    let username: String = prompt_until_valid(
        &format!("{}", "username to display for commits?".blue()),
        "using the one associated with your account is recommended",
        None,
        validate_input_username,
    )?;

    let email: String = prompt_until_valid(
        &format!("{}", "email used for commits?".blue()),
        "on github the `no-reply` address is recommended, see https://github.com/settings/emails",
        Some("number+user@users.noreply.github.com"),
        validate_input_email,
    )?;

    let ssh_choice: SshChoice = Select::new(
        &format!("{}", "create & set up an SSH key?".blue()),
        vec![SshChoice::Create, SshChoice::Skip],
    )
    .with_help_message("SSH is the preferred way of connecting to git servers")
    .prompt()?;

    let default_key_path = default_key_path.to_string_lossy();
    let ssh_key_path: String = Text::new(&format!("{}", "file in which to save the SSH key?".blue()))
        .with_default(&default_key_path)
        .prompt()?;

    let signing_choice: SigningChoice = Select::new(
        &format!("{}", "preferred commit signing?".blue()),
        vec![SigningChoice::Disabled, SigningChoice::Ssh],
    )
    .with_help_message("not required, but good practice")
    .prompt()?;

    let config = SetupConfig {
        scope,
        username,
        email,
        skip_ssh: ssh_choice == SshChoice::Skip,
        ssh_key_path: resolve_key_path(&ssh_key_path, &default_key_path),
        enable_signing: signing_choice == SigningChoice::Ssh,
    };
    tracing::debug!(?config, "form completed");
    Ok(config)
}

/// Empty answers fall back to the default so the key path is never empty
fn resolve_key_path(answer: &str, default_key_path: &str) -> PathBuf {
    if answer.is_empty() {
        PathBuf::from(default_key_path)
    } else {
        PathBuf::from(answer)
    }
}
