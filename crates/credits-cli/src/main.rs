//! credits-cli: check a track credit draft and emit its submission payload.
//!
//! Usage:
//!   credits-cli <draft.json>               # Replay and validate a draft file
//!   credits-cli -                          # Read the draft from stdin
//!   credits-cli --config <path> <draft>    # Use an explicit config file
//!
//! Prints the frozen submission as JSON on success. Exits 1 and lists every
//! blocking issue on stderr when the credits cannot be submitted.

mod config;
mod draft;

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context};
use tracing::{info, warn};

use credits_split::SplitError;

use crate::config::CliConfig;
use crate::draft::Draft;

/// Parsed command line.
struct Args {
    config: Option<PathBuf>,
    draft: String,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut config = None;
    let mut draft = None;
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().context("--config needs a path")?;
                config = Some(PathBuf::from(path));
            }
            _ if draft.is_none() => draft = Some(arg),
            _ => bail!("unexpected argument: {arg}"),
        }
    }

    let draft = draft.context("usage: credits-cli [--config <path>] <draft.json | ->")?;
    Ok(Args { config, draft })
}

fn read_draft(source: &str) -> anyhow::Result<String> {
    if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading draft from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(source).with_context(|| format!("reading draft {source}"))
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let args = parse_args()?;
    let config = CliConfig::load(args.config.as_deref())?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_directive().parse()?),
        )
        .init();

    info!(policy = ?config.validation.policy, "checking credit draft");

    let draft = Draft::parse(&read_draft(&args.draft)?)?;
    let credits = draft.replay(config.validation.policy)?;

    match credits.submit() {
        Ok(payload) => {
            println!("{}", serde_json::to_string_pretty(&payload)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(SplitError::Rejected(issues)) => {
            warn!(issues = issues.len(), "draft cannot be submitted");
            for issue in &issues {
                eprintln!("{issue}");
            }
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}
