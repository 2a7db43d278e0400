use clap::Parser;

use git_onboard::{
    cli::Cli, command::SystemCommandRunner, error::AppError, logging, output, pipeline, prompt,
};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(err) = run() {
        output::fatal(&err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let config = prompt::run_form()?;
    let summary = pipeline::run(&mut SystemCommandRunner, &config)?;
    summary.print();
    Ok(())
}
