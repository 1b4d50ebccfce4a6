//! enemyparam CLI - Command-line tool for enemy record extraction.
//!
//! This is the main entry point for the enemyparam command-line application.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::filter::EnvFilter;

use enemyparam::enemies::layout::ENEMY_COUNT;
use enemyparam::prelude::*;

/// enemyparam - enemy record extraction tool
#[derive(Parser)]
#[command(name = "enemyparam")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Input files shared by the record commands.
#[derive(Args)]
struct Inputs {
    /// Path to the enemies binary
    #[arg(short, long, env = "ENEMIES_BIN", default_value = "data/enemies.bin")]
    enemies: PathBuf,

    /// Path to the enemy names binary
    #[arg(short, long, env = "ENEMY_NAMES_BIN", default_value = "data/enemy_names.bin")]
    names: PathBuf,

    /// Path to the unknown enemy ID journal
    #[arg(
        short,
        long,
        env = "UNKNOWN_IDS_FILE",
        default_value = "data/unknown_enemy_ids.txt"
    )]
    unknown_ids: PathBuf,

    /// Number of records to read
    #[arg(short, long, default_value_t = ENEMY_COUNT)]
    count: u32,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a ParamTable element line for every enemy
    Export {
        #[command(flatten)]
        inputs: Inputs,

        /// Output file
        #[arg(
            short,
            long,
            env = "OUTPUT_FILE",
            default_value = "output/010_elements.txt"
        )]
        output: PathBuf,
    },

    /// Show a single enemy record
    Show {
        #[command(flatten)]
        inputs: Inputs,

        /// Record index
        #[arg(short, long)]
        index: u32,

        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the resolved enemy name table
    Names {
        /// Path to the enemy names binary
        #[arg(short, long, env = "ENEMY_NAMES_BIN", default_value = "data/enemy_names.bin")]
        names: PathBuf,

        /// Only show names containing this text (case-insensitive)
        #[arg(short, long)]
        filter: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Export { inputs, output } => {
            cmd_export(&inputs, &output)?;
        }
        Commands::Show {
            inputs,
            index,
            json,
        } => {
            cmd_show(&inputs, index, json)?;
        }
        Commands::Names { names, filter } => {
            cmd_names(&names, filter.as_deref())?;
        }
    }

    Ok(())
}

/// Install a stderr subscriber, defaulting to `info` (or `debug` with `--verbose`).
fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_export(inputs: &Inputs, output: &Path) -> Result<()> {
    println!("Extracting enemy data: {}", inputs.enemies.display());

    let start = Instant::now();
    let names = NameTable::open(&inputs.names).context("Failed to load enemy names")?;
    let mut journal =
        UnknownIdJournal::open(&inputs.unknown_ids).context("Failed to load unknown enemy IDs")?;
    let file = EnemyFile::open_with_count(&inputs.enemies, inputs.count)
        .context("Failed to open enemies file")?;

    println!(
        "Loaded {} names and {} unknown IDs in {:?}",
        names.len(),
        journal.len(),
        start.elapsed()
    );

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let out = File::create(output)
        .with_context(|| format!("Failed to create output file {}", output.display()))?;

    let mut reader = EnemyReader::new(file, &names, &mut journal);

    let pb = ProgressBar::new(u64::from(reader.count()));
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("#>-"),
    );

    let start = Instant::now();
    let summary = export_param_table(&mut reader, out, |_, _| pb.inc(1))
        .context("Failed to export enemy data")?;

    pb.finish_with_message("Done");
    println!(
        "Exported {} enemies in {:?} ({} named, {} unknown, {} new unknown IDs)",
        summary.written,
        start.elapsed(),
        summary.resolved,
        summary.unknown,
        summary.newly_journaled
    );
    println!("Result saved to: {}", output.display());

    Ok(())
}

fn cmd_show(inputs: &Inputs, index: u32, json: bool) -> Result<()> {
    let names = NameTable::open(&inputs.names).context("Failed to load enemy names")?;
    let mut journal =
        UnknownIdJournal::open(&inputs.unknown_ids).context("Failed to load unknown enemy IDs")?;
    let file = EnemyFile::open_with_count(&inputs.enemies, inputs.count)
        .context("Failed to open enemies file")?;

    let mut reader = EnemyReader::new(file, &names, &mut journal);
    let enemy = reader
        .read(index)
        .with_context(|| format!("Failed to read enemy {}", index))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&enemy)?);
    } else {
        println!("{}", enemy);
        println!(
            "  spirit={} magic={} speed=({}, {}, {}) poise={}",
            enemy.spirit, enemy.magic, enemy.speed1, enemy.speed2, enemy.speed3, enemy.poise
        );
    }

    Ok(())
}

fn cmd_names(path: &Path, filter: Option<&str>) -> Result<()> {
    let names = NameTable::open(path).context("Failed to load enemy names")?;

    let filter = filter.map(str::to_lowercase);
    let mut entries: Vec<(u32, &str)> = names
        .iter()
        .filter(|(_, name)| {
            filter
                .as_deref()
                .map_or(true, |f| name.to_lowercase().contains(f))
        })
        .collect();
    entries.sort_unstable_by_key(|(id, _)| *id);

    for (id, name) in &entries {
        println!("{:>10} {}", id, name);
    }

    println!("\nTotal: {} names", entries.len());

    Ok(())
}
