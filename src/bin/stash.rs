//! recordstash CLI
//!
//! Command-line front-end for the JSON and CSV stores.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use recordstash::{Cell, DictStore, LineEnding, ListStore, Result, StashConfig, StashError};
use tracing_subscriber::{fmt, EnvFilter};

/// recordstash CLI
#[derive(Parser, Debug)]
#[command(name = "stash")]
#[command(about = "Save and read JSON records and CSV rows")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    format: FormatArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Formatting flags shared by every subcommand
#[derive(Args, Debug)]
struct FormatArgs {
    /// Spaces per JSON indentation level
    #[arg(long, global = true, default_value = "4")]
    indent: usize,

    /// CSV field delimiter (single ASCII character)
    #[arg(long, global = true, default_value = ",")]
    delimiter: char,

    /// Terminate CSV rows with LF instead of CRLF
    #[arg(long, global = true)]
    lf: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// JSON record archive operations
    #[command(subcommand)]
    Dict(DictCommand),

    /// CSV row table operations
    #[command(subcommand)]
    List(ListCommand),
}

#[derive(Subcommand, Debug)]
enum DictCommand {
    /// Save a record (merged into the archive unless --overwrite)
    Save {
        path: PathBuf,

        /// Record as JSON text
        json: String,

        /// Replace the archive instead of merging
        #[arg(short, long)]
        overwrite: bool,
    },

    /// Append a record, keeping the archive an array
    Push {
        path: PathBuf,

        /// Record as JSON text
        json: String,
    },

    /// Print the archive
    Read { path: PathBuf },
}

#[derive(Subcommand, Debug)]
enum ListCommand {
    /// Save one row (appended unless --overwrite)
    Save {
        path: PathBuf,

        /// Cell values
        #[arg(allow_hyphen_values = true)]
        cells: Vec<String>,

        /// Replace the table instead of appending
        #[arg(short, long)]
        overwrite: bool,
    },

    /// Print rows as JSON
    Read {
        path: PathBuf,

        /// Print only the row at this zero-based position
        #[arg(short, long)]
        index: Option<usize>,
    },

    /// Remove every row
    Clear { path: PathBuf },

    /// Print the number of rows
    Count { path: PathBuf },
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,recordstash=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = build_config(&cli.format)?;

    match cli.command {
        Commands::Dict(command) => run_dict(DictStore::with_config(config), command),
        Commands::List(command) => run_list(ListStore::with_config(config), command),
    }
}

fn build_config(args: &FormatArgs) -> Result<StashConfig> {
    if !args.delimiter.is_ascii() {
        return Err(StashError::Config(format!(
            "delimiter must be ASCII, got {:?}",
            args.delimiter
        )));
    }

    let terminator = if args.lf { LineEnding::Lf } else { LineEnding::Crlf };
    let config = StashConfig::builder()
        .json_indent(args.indent)
        .csv_delimiter(args.delimiter as u8)
        .csv_terminator(terminator)
        .build();

    config.validate()?;
    Ok(config)
}

fn run_dict(store: DictStore, command: DictCommand) -> Result<()> {
    match command {
        DictCommand::Save { path, json, overwrite } => {
            let record: serde_json::Value = serde_json::from_str(&json)?;
            store.save(&path, &record, overwrite)?;
            tracing::info!("Saved record to {}", path.display());
        }
        DictCommand::Push { path, json } => {
            let record: serde_json::Value = serde_json::from_str(&json)?;
            let len = store.push(&path, &record)?;
            tracing::info!("Archive {} now holds {} records", path.display(), len);
        }
        DictCommand::Read { path } => {
            let value = store.read(&path);
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }
    Ok(())
}

fn run_list(store: ListStore, command: ListCommand) -> Result<()> {
    match command {
        ListCommand::Save { path, cells, overwrite } => {
            let row: Vec<Cell> = cells.iter().map(|raw| Cell::coerce(raw)).collect();
            store.save(&path, &row, overwrite)?;
            tracing::info!("Saved row of {} cells to {}", row.len(), path.display());
        }
        ListCommand::Read { path, index: Some(index) } => {
            match store.read_at(&path, index) {
                Some(row) => println!("{}", serde_json::to_string(&row)?),
                None => println!("null"),
            }
        }
        ListCommand::Read { path, index: None } => {
            for row in store.read(&path) {
                println!("{}", serde_json::to_string(&row)?);
            }
        }
        ListCommand::Clear { path } => {
            store.clear(&path)?;
            tracing::info!("Cleared {}", path.display());
        }
        ListCommand::Count { path } => {
            println!("{}", store.count(&path)?);
        }
    }
    Ok(())
}
