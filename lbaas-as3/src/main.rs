use anyhow::Result;
use clap::Parser;
use tracing::Level;

mod cli;
mod path_guard;
mod translate_cmd;

use cli::Cli;

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if cli::is_arity_error(&err) => {
            println!("{}", cli::usage());
            return Ok(());
        }
        Err(err) => err.exit(),
    };

    init_tracing(cli.verbose);
    translate_cmd::run_translate(cli)
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
