//! markdown2html CLI - convert a Markdown file into an HTML file

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

use markdown2html::{convert_file, Error, Options};

#[derive(Debug, Parser)]
#[command(
    name = "markdown2html",
    about = "Convert a Markdown file to HTML",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Markdown file to read
    #[arg(allow_hyphen_values = true)]
    input: PathBuf,
    /// HTML file to write
    #[arg(allow_hyphen_values = true)]
    output: PathBuf,
    /// Extra arguments are accepted and ignored
    #[arg(hide = true, allow_hyphen_values = true)]
    extra: Vec<String>,
}

fn main() -> ExitCode {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Error> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            log::debug!("argument error: {err}");
            return Err(Error::Usage);
        }
    };
    if !cli.extra.is_empty() {
        log::debug!("ignoring {} extra arguments", cli.extra.len());
    }

    convert_file(&cli.input, &cli.output, &Options::default())?;
    Ok(())
}
