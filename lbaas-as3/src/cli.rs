use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

#[derive(Parser, Debug)]
#[command(name = "lbaas-as3")]
#[command(about = "Translate a load balancer bundle into an AS3 declaration")]
pub struct Cli {
    /// Load balancer bundle (JSON) to translate.
    pub input: PathBuf,
    /// Write the declaration to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Optional TOML file overriding declaration settings (schema version, update mode, template).
    #[arg(long)]
    pub settings: Option<PathBuf>,
    /// Indent the JSON output.
    #[arg(long)]
    pub pretty: bool,
    /// Print a one-line object count summary to stderr.
    #[arg(long)]
    pub summary: bool,
    /// Emit debug logs to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

/// True when the error is about the number of positional arguments.
pub fn is_arity_error(err: &clap::Error) -> bool {
    matches!(
        err.kind(),
        ErrorKind::MissingRequiredArgument | ErrorKind::UnknownArgument
    )
}

pub fn usage() -> String {
    Cli::command().render_usage().to_string()
}
