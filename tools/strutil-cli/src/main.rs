//! strutil - command line front end for the strutil helpers
//!
//! Exposes value formatting/parsing, Latin-1 case mapping and hex encoding.
//! Results go to stdout, logs to stderr.

mod commands;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use strutil::{load_options, StrUtilResult};
use tracing::{debug, event, Level};
use tracing_subscriber::EnvFilter;

use crate::commands::{execute, Commands};
use crate::output::{render_error, render_success};

#[derive(Parser)]
#[command(name = "strutil")]
#[command(about = "Value/text conversion, Latin-1 case mapping and hex encoding")]
#[command(long_about = "Value/text conversion, Latin-1 case mapping and hex encoding

Commands:
  format      Print a value of a given kind as text
  parse       Parse the leading prefix of a text as a given kind
  upper       Uppercase text using Latin-1 rules
  lower       Lowercase text using Latin-1 rules
  hex         Hex-encode the bytes of a text

Examples:
  strutil format f64 9.234 --precision 3     # 9.234
  strutil parse i32 \"42 apples\"              # 42
  strutil upper \"ação\"                        # AÇÃO
  strutil hex AB --separator -               # 41-42-

Options may also come from a TOML/YAML/JSON file (--config) and from
STRUTIL_PRECISION, STRUTIL_SEPARATOR and STRUTIL_CHECKED.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Print results and errors as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Options file (TOML, YAML or JSON)
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,
}

fn init_logging(verbose: bool) {
    let log_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> StrUtilResult<String> {
    let options = load_options(cli.config.as_deref())?;
    debug!(?options, "Effective options");

    let output = execute(&cli.command, &options)?;
    render_success(cli.command.name(), cli.command.input(), &output, cli.json)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Configure colored output
    if cli.no_color || cli.json {
        colored::control::set_override(false);
    }

    init_logging(cli.verbose);

    match run(&cli) {
        Ok(text) => {
            println!("{}", text);
            ExitCode::SUCCESS
        },
        Err(err) => {
            match err.log_level() {
                Level::ERROR => event!(Level::ERROR, code = err.error_code(), "{}", err),
                Level::WARN => event!(Level::WARN, code = err.error_code(), "{}", err),
                Level::INFO => event!(Level::INFO, code = err.error_code(), "{}", err),
                _ => event!(Level::DEBUG, code = err.error_code(), "{}", err),
            }

            let rendered = render_error(&err, cli.json);
            if cli.json {
                println!("{}", rendered);
            } else {
                eprintln!("{}", rendered);
            }
            ExitCode::from(err.exit_code() as u8)
        },
    }
}
