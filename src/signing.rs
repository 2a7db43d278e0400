use crate::{
    command::CommandRunner,
    config::SetupConfig,
    error::AppError,
    git::{ConfigEntry, apply_git_config},
    ssh,
};

/// Entries that make git sign every commit with the SSH key
pub fn signing_entries(key_path: &str) -> [ConfigEntry<'_>; 3] {
    [
        ConfigEntry {
            key: "gpg.format",
            value: "ssh",
            label: "signing type",
        },
        ConfigEntry {
            key: "user.signingkey",
            value: key_path,
            label: "signing key",
        },
        ConfigEntry {
            key: "commit.gpgsign",
            value: "true",
            label: "to sign commits by default",
        },
    ]
}

/// Configures SSH commit signing, creating the key if the SSH step was skipped
pub fn configure_signing(
    runner: &mut dyn CommandRunner,
    config: &SetupConfig,
) -> Result<(), AppError> {
    if !config.generates_ssh_key() {
        ssh::generate_key(runner, &config.ssh_key_path, &config.email)?;
    }

    let key_path = config.ssh_key_path.to_string_lossy();
    apply_git_config(runner, config.scope, &signing_entries(&key_path))
}
