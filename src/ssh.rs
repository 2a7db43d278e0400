use std::path::Path;

use crate::{command::CommandRunner, config::SetupConfig, error::AppError, output};

/// Generates an ed25519 key pair, handing the terminal to `ssh-keygen`
///
/// `ssh-keygen` may ask for a passphrase or whether to overwrite an existing key.
pub fn generate_key(
    runner: &mut dyn CommandRunner,
    key_path: &Path,
    email: &str,
) -> Result<(), AppError> {
    let key_path: String = key_path.to_string_lossy().into_owned();
    runner.run_attached("ssh-keygen", &["-t", "ed25519", "-f", key_path.as_str(), "-C", email])?;
    tracing::info!(path = %key_path, "ssh key generated");
    output::success("generated ssh key");
    Ok(())
}

/// Registers the key with the running agent
///
/// `ssh-add` also fails when the key is already loaded, so failure is only a warning.
pub fn add_to_agent(runner: &mut dyn CommandRunner, key_path: &Path) {
    let key_path: String = key_path.to_string_lossy().into_owned();
    match runner.run("ssh-add", &[key_path.as_str()]) {
        Ok(()) => output::success("added ssh key to agent"),
        Err(err) => {
            tracing::warn!(error = %err, "ssh-add failed");
            output::warning(&format!(
                "warning: failed to add ssh key using `ssh-add`\n\
                 this can happen if the key is already added. if it isn't, try running `ssh-add {key_path}`"
            ));
        }
    }
}

/// Creates the authentication key and loads it into the agent
pub fn provision(runner: &mut dyn CommandRunner, config: &SetupConfig) -> Result<(), AppError> {
    generate_key(runner, &config.ssh_key_path, &config.email)?;
    add_to_agent(runner, &config.ssh_key_path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::{command::command_line, config::GitScope};

    /// Fails every `ssh-add` call
    #[derive(Default)]
    struct AgentDown {
        calls: Vec<String>,
    }

    impl CommandRunner for AgentDown {
        fn run(&mut self, program: &str, args: &[&str]) -> Result<(), AppError> {
            let line = command_line(program, args);
            self.calls.push(line.clone());
            Err(AppError::Command {
                command: line,
                reason: "Could not open a connection to your authentication agent.".to_string(),
            })
        }

        fn run_attached(&mut self, program: &str, args: &[&str]) -> Result<(), AppError> {
            self.calls.push(command_line(program, args));
            Ok(())
        }
    }

    #[test]
    fn agent_failure_does_not_fail_provisioning() {
        let config = SetupConfig {
            scope: GitScope::Global,
            username: "octo".to_string(),
            email: "octo@example.com".to_string(),
            skip_ssh: false,
            ssh_key_path: PathBuf::from("/tmp/id_ed25519"),
            enable_signing: false,
        };
        let mut runner = AgentDown::default();

        provision(&mut runner, &config).unwrap();
        assert_eq!(
            runner.calls,
            vec![
                "ssh-keygen -t ed25519 -f /tmp/id_ed25519 -C octo@example.com",
                "ssh-add /tmp/id_ed25519",
            ]
        );
    }
}
