//! Row action button policy CLI.
//!
//! Answers which row buttons are shown or disabled for a lifecycle state,
//! renders whole row snapshots, and walks a row through lifecycle events.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, warn};

use rowpolicy::core::policy::{should_disable_label, should_show_label};
use rowpolicy::core::types::RowState;
use rowpolicy::exit_codes;
use rowpolicy::io::config::{CONFIG_FILE, OutputFormat, PolicyConfig, init_config, load_config};
use rowpolicy::io::rows::write_report;
use rowpolicy::{logging, render, walk};

#[derive(Parser)]
#[command(
    name = "rowpolicy",
    version,
    about = "Row action button policy for editable tables"
)]
struct Cli {
    /// Config file (defaults to `rowpolicy.toml` in the working directory).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a default config file if missing.
    Init {
        /// Overwrite an existing config file.
        #[arg(short, long)]
        force: bool,
    },
    /// Print whether a button is shown for a row state.
    Show {
        button: String,
        /// Row state label; omitted means `default`.
        #[arg(long)]
        state: Option<String>,
    },
    /// Print whether a button is disabled for a row state.
    Disable {
        button: String,
        /// Row state label; omitted means `default`.
        #[arg(long)]
        state: Option<String>,
    },
    /// Print the decision matrix for every known state.
    Matrix {
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Render the buttons of every row in a JSON snapshot file.
    Render {
        rows: PathBuf,
        #[arg(long, value_enum, conflicts_with = "out")]
        format: Option<OutputFormat>,
        /// Write the JSON report here instead of printing it.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Apply lifecycle events to a row and print each step.
    Walk {
        /// Starting state label.
        #[arg(long, default_value = "default")]
        from: String,
        /// Events: edit, delete, update, cancel, modify, settle.
        #[arg(required = true)]
        events: Vec<String>,
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    // Usage errors share the INVALID code; clap's own exit code collides with REJECTED.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => {
            err.print()?;
            return Ok(exit_codes::OK);
        }
        Err(err) => {
            err.print()?;
            return Ok(exit_codes::INVALID);
        }
    };
    match cli.command {
        Command::Init { force } => {
            let path = cli.config.as_deref().unwrap_or(Path::new(CONFIG_FILE));
            if init_config(path, force)? {
                println!("wrote {}", path.display());
            } else {
                println!("kept {}", path.display());
            }
            Ok(exit_codes::OK)
        }
        Command::Show { button, state } => {
            let shown = should_show_label(&button, state.as_deref());
            debug!(%button, state = ?state, shown, "show");
            println!("{}", shown);
            Ok(exit_codes::OK)
        }
        Command::Disable { button, state } => {
            let disabled = should_disable_label(&button, state.as_deref());
            debug!(%button, state = ?state, disabled, "disable");
            println!("{}", disabled);
            Ok(exit_codes::OK)
        }
        Command::Matrix { format } => {
            let cfg = config(cli.config.as_deref())?;
            let report = render::policy_matrix(&cfg);
            print_report(format.unwrap_or(cfg.format), &report, render::format_text)?;
            Ok(exit_codes::OK)
        }
        Command::Render { rows, format, out } => {
            let cfg = config(cli.config.as_deref())?;
            let report = render::render_file(&rows, &cfg)?;
            match out {
                Some(out) => {
                    write_report(&out, &report)
                        .with_context(|| format!("write report {}", out.display()))?;
                }
                None => print_report(format.unwrap_or(cfg.format), &report, render::format_text)?,
            }
            Ok(exit_codes::OK)
        }
        Command::Walk { from, events, format } => {
            let cfg = config(cli.config.as_deref())?;
            let events = walk::parse_events(&events)?;
            let start = RowState::from(from.as_str());
            if !start.is_recognized() {
                warn!(state = %from, "unrecognized row state");
            }
            let outcome = walk::walk(start, &events, &cfg);
            print_report(format.unwrap_or(cfg.format), &outcome, walk::format_text)?;
            if outcome.rejected.is_some() {
                return Ok(exit_codes::REJECTED);
            }
            Ok(exit_codes::OK)
        }
    }
}

fn config(path: Option<&Path>) -> Result<PolicyConfig> {
    let path = path.unwrap_or(Path::new(CONFIG_FILE));
    load_config(path).with_context(|| format!("load config {}", path.display()))
}

fn print_report<T: Serialize>(
    format: OutputFormat,
    value: &T,
    text: impl Fn(&T) -> String,
) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", text(value)),
        OutputFormat::Json => {
            let payload = serde_json::to_string_pretty(value).context("serialize json")?;
            println!("{}", payload);
        }
    }
    Ok(())
}
