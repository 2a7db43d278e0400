use std::{
    ffi::OsString,
    fmt,
    path::{Path, PathBuf},
};

use crate::error::AppError;

/// Key file created under `~/.ssh` when the user keeps the default
const DEFAULT_SSH_KEY_FILE: &str = "id_ed25519";

/// Where `git config` writes are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitScope {
    /// Applies to every repository of the current user
    Global,
    /// Applies to the repository in the current directory only
    Local,
}

impl GitScope {
    /// Flag passed to `git config`
    pub fn flag(self) -> &'static str {
        match self {
            GitScope::Global => "--global",
            GitScope::Local => "--local",
        }
    }
}

impl fmt::Display for GitScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GitScope::Global => write!(f, "Global (recommended)"),
            GitScope::Local => write!(f, "Local  (not recommended)"),
        }
    }
}

/// Answers collected by the setup form, passed read-only to every step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupConfig {
    /// Target of the git config writes
    pub scope: GitScope,
    /// Git `user.name`
    pub username: String,
    /// Git `user.email`, also used as the SSH key comment
    pub email: String,
    /// Skip creating an SSH key for authentication
    pub skip_ssh: bool,
    /// Private key location, never empty
    pub ssh_key_path: PathBuf,
    /// Sign commits with the SSH key
    pub enable_signing: bool,
}

impl SetupConfig {
    /// Whether the SSH step runs (and so generates the key)
    pub fn generates_ssh_key(&self) -> bool {
        !self.skip_ssh
    }

    /// Whether a key exists by the end of the run and instructions are shown
    pub fn needs_key_instructions(&self) -> bool {
        !self.skip_ssh || self.enable_signing
    }

    /// Path of the public half, `<ssh_key_path>.pub`
    pub fn public_key_path(&self) -> PathBuf {
        public_key_path(&self.ssh_key_path)
    }
}

/// Appends `.pub` to a private key path
pub fn public_key_path(private_key: &Path) -> PathBuf {
    let mut path: OsString = private_key.as_os_str().to_owned();
    path.push(".pub");
    PathBuf::from(path)
}

/// Default private key location, `<home>/.ssh/id_ed25519`
pub fn default_ssh_key_path() -> Result<PathBuf, AppError> {
    let home_dir: PathBuf = dirs::home_dir().ok_or(AppError::HomeDirNotFound)?;
    Ok(ssh_key_path_in(&home_dir))
}

fn ssh_key_path_in(home_dir: &Path) -> PathBuf {
    home_dir.join(".ssh").join(DEFAULT_SSH_KEY_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(skip_ssh: bool, enable_signing: bool) -> SetupConfig {
        SetupConfig {
            scope: GitScope::Global,
            username: "octo".to_string(),
            email: "octo@example.com".to_string(),
            skip_ssh,
            ssh_key_path: PathBuf::from("/home/octo/.ssh/id_ed25519"),
            enable_signing,
        }
    }

    #[test]
    fn scope_flags() {
        assert_eq!(GitScope::Global.flag(), "--global");
        assert_eq!(GitScope::Local.flag(), "--local");
    }

    #[test]
    fn public_key_appends_extension() {
        assert_eq!(
            public_key_path(Path::new("/tmp/keys/work.key")),
            PathBuf::from("/tmp/keys/work.key.pub")
        );
        assert_eq!(
            config(false, false).public_key_path(),
            PathBuf::from("/home/octo/.ssh/id_ed25519.pub")
        );
    }

    #[test]
    fn default_key_lives_in_dot_ssh() {
        assert_eq!(
            ssh_key_path_in(Path::new("/home/octo")),
            PathBuf::from("/home/octo/.ssh/id_ed25519")
        );
    }

    #[test]
    fn instructions_follow_key_creation() {
        assert!(!config(true, false).needs_key_instructions());
        assert!(config(false, false).needs_key_instructions());
        assert!(config(true, true).needs_key_instructions());
        assert!(config(false, true).needs_key_instructions());
        assert!(!config(true, true).generates_ssh_key());
    }
}
