use clap::{ArgAction, Parser};

/// CLI arguments parser using `clap`
///
/// Every setup answer is collected interactively; flags only tune diagnostics.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_flag_counts_occurrences() {
        let cli = Cli::parse_from(["git-onboard", "-vv"]);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn no_flags_means_quiet() {
        let cli = Cli::parse_from(["git-onboard"]);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn form_answers_are_not_accepted_as_arguments() {
        assert!(Cli::try_parse_from(["git-onboard", "--email", "a@b.c"]).is_err());
    }
}
