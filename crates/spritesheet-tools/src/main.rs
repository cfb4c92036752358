//! # sprite-replay
//!
//! Replays a recorded action log through the editor reducer and prints the
//! resulting state as a versioned snapshot.
//!
//! ```text
//! sprite-replay [--config <path>] [--out <path>] <action-log>
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

use anyhow::{bail, Context, Result};
use spritesheet_state::snapshot::EditorSnapshot;
use spritesheet_tools::config::ToolsConfig;
use spritesheet_tools::replay::{replay, ActionLog};
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const HELP: &str = "\
sprite-replay: fold an action log through the editor reducer

USAGE:
    sprite-replay [OPTIONS] <ACTION_LOG>

OPTIONS:
    --config <PATH>   TOML configuration (default: ./sprite-replay.toml)
    --out <PATH>      Write the snapshot here instead of stdout
    -h, --help        Print this help
";

/// Main entry point.
fn main() -> Result<()> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let config_path: Option<PathBuf> = args.opt_value_from_str("--config")?;
    let out_path: Option<PathBuf> = args.opt_value_from_str("--out")?;
    let log_path: PathBuf = args
        .free_from_str()
        .context("missing action log path (see --help)")?;
    let unused = args.finish();

    let config = config_path.map_or_else(ToolsConfig::load, ToolsConfig::load_from);

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .context("invalid log filter")?;
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if !unused.is_empty() {
        warn!("Ignoring extra arguments: {unused:?}");
    }

    let log = ActionLog::load(&log_path)
        .with_context(|| format!("failed to load action log {}", log_path.display()))?;
    let outcome = replay(&log, config.initial_state(), config.check_invariants);
    info!(
        "Replayed {} actions: {} applied, {} unchanged",
        log.len(),
        outcome.applied,
        outcome.unchanged
    );

    let json = EditorSnapshot::capture(&outcome.state).to_json(config.pretty)?;
    match out_path {
        Some(path) => {
            fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))?;
            info!("Wrote snapshot to {}", path.display());
        },
        None => println!("{json}"),
    }

    if !outcome.is_clean() {
        for violation in &outcome.violations {
            warn!(
                "Action #{} ({}) broke an invariant: {}",
                violation.index, violation.action, violation.error
            );
        }
        bail!("{} invariant violation(s) during replay", outcome.violations.len());
    }
    Ok(())
}
