use crate::{
    command::CommandRunner,
    config::{GitScope, SetupConfig},
    error::AppError,
    output,
};

/// A single `git config` write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry<'a> {
    /// Git config key, e.g. `user.name`
    pub key: &'static str,
    /// Value written for the key
    pub value: &'a str,
    /// Human readable name used in the success line
    pub label: &'static str,
}

/// Executes a Git config set command
///
/// # Arguments
/// * `scope` - Global or local git configuration
/// * `key` - Git config key to set
/// * `value` - Value to set for key
pub fn set_git_config(
    runner: &mut dyn CommandRunner,
    scope: GitScope,
    key: &str,
    value: &str,
) -> Result<(), AppError> {
    runner.run("git", &["config", scope.flag(), key, value])
}

/// Applies entries in order, stopping at the first failing write
pub fn apply_git_config(
    runner: &mut dyn CommandRunner,
    scope: GitScope,
    entries: &[ConfigEntry<'_>],
) -> Result<(), AppError> {
    for entry in entries {
        set_git_config(runner, scope, entry.key, entry.value)?;
        tracing::info!(key = entry.key, scope = scope.flag(), "git config set");
        output::success(&format!("set git {}", entry.label));
    }
    Ok(())
}

/// Username and email entries
pub fn identity_entries(config: &SetupConfig) -> [ConfigEntry<'_>; 2] {
    [
        ConfigEntry {
            key: "user.name",
            value: &config.username,
            label: "username",
        },
        ConfigEntry {
            key: "user.email",
            value: &config.email,
            label: "email",
        },
    ]
}

/// Sets the commit identity at the configured scope
pub fn configure_identity(
    runner: &mut dyn CommandRunner,
    config: &SetupConfig,
) -> Result<(), AppError> {
    apply_git_config(runner, config.scope, &identity_entries(config))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
        fail_on: Option<&'static str>,
    }

    impl CommandRunner for Recorder {
        fn run(&mut self, program: &str, args: &[&str]) -> Result<(), AppError> {
            let line = crate::command::command_line(program, args);
            self.calls.push(line.clone());
            match self.fail_on {
                Some(key) if args.contains(&key) => Err(AppError::Command {
                    command: line,
                    reason: "exit status: 1".to_string(),
                }),
                _ => Ok(()),
            }
        }

        fn run_attached(&mut self, program: &str, args: &[&str]) -> Result<(), AppError> {
            self.run(program, args)
        }
    }

    fn config() -> SetupConfig {
        SetupConfig {
            scope: GitScope::Local,
            username: "octo".to_string(),
            email: "octo@example.com".to_string(),
            skip_ssh: true,
            ssh_key_path: PathBuf::from("/tmp/id_ed25519"),
            enable_signing: false,
        }
    }

    #[test]
    fn email_entry_uses_email_value() {
        let config = config();
        let entries = identity_entries(&config);
        assert_eq!(entries[0].value, "octo");
        assert_eq!(entries[1].key, "user.email");
        assert_eq!(entries[1].value, "octo@example.com");
    }

    #[test]
    fn identity_written_at_scope() {
        let mut runner = Recorder::default();
        configure_identity(&mut runner, &config()).unwrap();
        assert_eq!(
            runner.calls,
            vec![
                "git config --local user.name octo",
                "git config --local user.email octo@example.com",
            ]
        );
    }

    #[test]
    fn first_failure_stops_the_sequence() {
        let mut runner = Recorder {
            fail_on: Some("user.name"),
            ..Recorder::default()
        };
        let err = configure_identity(&mut runner, &config()).unwrap_err();
        assert!(matches!(err, AppError::Command { .. }));
        assert_eq!(runner.calls.len(), 1);
    }
}
