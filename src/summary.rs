use std::{fs, path::Path};

use crate::{error::AppError, output};

/// Final message of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Summary {
    /// Only the git identity was configured
    Finished,
    /// A key was created; tells the user where to upload it
    KeyInstructions {
        /// Literal contents of the `.pub` file
        public_key: String,
    },
}

/// Reads the public key file verbatim
pub fn read_public_key(path: &Path) -> Result<String, AppError> {
    fs::read_to_string(path).map_err(|source| AppError::PublicKey {
        path: path.to_path_buf(),
        source,
    })
}

impl Summary {
    /// Lines printed to the terminal
    pub fn lines(&self) -> Vec<String> {
        match self {
            Summary::Finished => vec![output::success_line("finished!")],
            Summary::KeyInstructions { public_key } => vec![
                output::info("\nalmost done!"),
                "on github, open `https://github.com/settings/keys` and press `New SSH key`".to_string(),
                "if you set up SSH, set `Key type` to `Authentication Key`".to_string(),
                "if you set up signing, set `Key type` to `Signing Key`".to_string(),
                "github needs a separate entry for each key type, but both can use the same key on this machine\n".to_string(),
                "key:".to_string(),
                output::info(public_key),
                "\nif you set up SSH, add `ssh-agent` to your shell startup to avoid re-typing the key passphrase on every push".to_string(),
                output::info("eval \"$(ssh-agent -s)\""),
            ],
        }
    }

    /// Prints the summary
    pub fn print(&self) {
        for line in self.lines() {
            println!("{line}");
        }
    }
}
