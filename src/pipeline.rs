use crate::{
    command::CommandRunner,
    config::SetupConfig,
    error::AppError,
    git, signing, ssh,
    summary::{Summary, read_public_key},
};

/// Applies the collected answers in order and builds the closing summary
///
/// Any error aborts the remaining steps. Only a failing `ssh-add` is tolerated.
pub fn run(runner: &mut dyn CommandRunner, config: &SetupConfig) -> Result<Summary, AppError> {
    git::configure_identity(runner, config)?;

    if config.generates_ssh_key() {
        ssh::provision(runner, config)?;
    }

    if config.enable_signing {
        signing::configure_signing(runner, config)?;
    }

    if !config.needs_key_instructions() {
        return Ok(Summary::Finished);
    }

    let public_key: String = read_public_key(&config.public_key_path())?;
    Ok(Summary::KeyInstructions { public_key })
}
