use std::io::Write;

use anyhow::{Context, Result};
use as3_declaration::{write, write_file, WriteStyle};
use tracing::info;

use crate::cli::Cli;
use crate::path_guard::ensure_output_not_input;
use lbaas_as3::bundle::load_bundle;
use lbaas_as3::conversion_summary::{render as render_summary, summarize};
use lbaas_as3::ids::RandomIds;
use lbaas_as3::settings::{load_settings, DeclarationSettings};
use lbaas_as3::translate::translate;

/// Load the bundle, translate it, and emit the declaration.
///
/// Nothing is written to stdout or `--output` unless the whole translation
/// succeeds.
pub fn run_translate(args: Cli) -> Result<()> {
    if let Some(output) = &args.output {
        ensure_output_not_input(output, &args.input)?;
    }

    let settings = match &args.settings {
        Some(path) => load_settings(path)?,
        None => DeclarationSettings::default(),
    };

    let bundle = load_bundle(&args.input)?;
    let envelope = translate(&bundle, &settings, &RandomIds)
        .context("invalid load balancer bundle")?;

    let style = if args.pretty {
        WriteStyle::Pretty
    } else {
        WriteStyle::Compact
    };

    match &args.output {
        Some(path) => {
            write_file(&envelope, style, path)
                .with_context(|| format!("failed to write declaration {}", path.display()))?;
            info!(output = %path.display(), "wrote declaration");
        }
        None => {
            let mut bytes = write(&envelope, style).context("failed to encode declaration")?;
            bytes.push(b'\n');
            std::io::stdout()
                .lock()
                .write_all(&bytes)
                .context("failed to write declaration to stdout")?;
        }
    }

    if args.summary {
        eprintln!("{}", render_summary(summarize(&envelope)));
    }

    Ok(())
}
