use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use bosun::commands::{self, Commands};
use bosun::config::Config;
use bosun::output::{ErrorResponse, print_json};

/// bosun - request-intent scoring and duplicate detection for chat content
/// backlogs
#[derive(Parser)]
#[command(name = "bosun", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Emit machine-readable JSON instead of human output
    #[arg(long, global = true)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => return report_error(&e, cli.json),
    };

    match commands::execute(&cli.command, &config, cli.json) {
        Ok(code) => code,
        Err(e) => report_error(&e, cli.json),
    }
}

fn report_error(error: &bosun::Error, json: bool) -> ExitCode {
    if json {
        print_json(&ErrorResponse {
            error: error.to_string(),
        });
    } else {
        eprintln!("Error: {error}");
    }
    ExitCode::FAILURE
}
