//! Tagtree CLI application entry point
//!
//! Reads a tag payload exported from a controller and prints its catalog,
//! its (optionally filtered) tag tree, or an accumulated tag selection.
//!
//! # Usage
//!
//! ```bash
//! # Print every tag path with its type and shape
//! tagtree catalog tags.json
//! tagtree catalog tags.json --json
//!
//! # Print the tree, keeping nodes whose label contains "motor"
//! tagtree tree tags.json -f motor
//! tagtree tree tags.json -f '^fault' --regex --tooltips
//!
//! # Collect fault tags
//! tagtree select -p tags.json Line1.Motor.Faults Line1.Motor.Speed
//! ```
//!
//! # Configuration
//!
//! Defaults are read from the user's config directory
//! (`~/.config/tagtree/config.toml` on Linux). Set `RUST_LOG` or pass `-v`
//! for diagnostic logging on stderr.

use std::process::ExitCode;
use tagtree::{
    TagtreeError,
    cli::{Cli, Commands},
    commands,
    config::TagtreeConfig,
    filter::{FilterMode, FilterPattern},
};
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, TagtreeError>;

fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<TagtreeConfig> {
    let config = match &cli.config {
        Some(path) => TagtreeConfig::load_from(path)?,
        None => TagtreeConfig::load()?,
    };
    Ok(config)
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    let quiet = cli.quiet || config.quiet;

    match cli.command {
        Commands::Catalog { payload, json } => {
            let payload = commands::resolve_payload(payload.as_deref(), &config)?;
            commands::catalog(&payload, json, quiet)
        }
        Commands::Tree {
            payload,
            filter,
            regex,
            tooltips,
        } => {
            let payload = commands::resolve_payload(payload.as_deref(), &config)?;
            let mode = if regex { FilterMode::Regex } else { config.filter_mode };
            let pattern = FilterPattern::new(filter.as_deref().unwrap_or(""), mode)?;
            commands::tree(&payload, &pattern, tooltips || config.show_tooltips, quiet)
        }
        Commands::Select { payload, paths } => {
            let payload = commands::resolve_payload(payload.as_deref(), &config)?;
            commands::select(&payload, &paths, quiet)
        }
        Commands::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
