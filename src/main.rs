use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use family_register::cli::{Menu, OutputFormat};
use family_register::utils::logging::{init_logging, log_session_complete};
use family_register::{PersonRegistry, RegisterConfig};
use log::info;

#[derive(Parser)]
#[command(name = "family-register")]
#[command(author, version, about = "In-memory genealogy register", long_about = None)]
struct Cli {
    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Render listings as JSON
    #[arg(long)]
    json: bool,

    /// Print the mutation journal as JSON lines when the session ends
    #[arg(long)]
    dump_journal: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => RegisterConfig::from_json_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => RegisterConfig::default(),
    };
    info!("{config}");

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let start = Instant::now();
    let mut registry = PersonRegistry::with_config(config);
    let mut menu = Menu::new(io::stdin().lock(), io::stdout().lock()).with_format(format);
    menu.run(&mut registry)?;

    let mut out = menu.into_output();
    if cli.dump_journal {
        write!(out, "{}", registry.journal().to_json_lines()?)?;
        out.flush()?;
    }

    log_session_complete(registry.len(), registry.journal().len(), Some(start.elapsed()));
    Ok(())
}
