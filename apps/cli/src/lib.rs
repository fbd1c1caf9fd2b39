pub mod config;
pub mod error;

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use mdcards_core::{get_renderer, parse, Card};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::error::{CliError, Result};

/// What an export produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub cards: usize,
    pub format: String,
    pub output: Option<PathBuf>,
}

pub fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::parse();
    let summary = export(&config)?;

    match &summary.output {
        Some(path) => tracing::info!(
            "Exported {} cards as {} to {}",
            summary.cards,
            summary.format,
            path.display()
        ),
        None => tracing::info!("Exported {} cards as {}", summary.cards, summary.format),
    }

    Ok(())
}

/// Read a card file and parse it. Any read failure aborts the whole load.
pub fn load_cards(path: &Path) -> Result<Vec<Card>> {
    tracing::info!("Loading cards from {}", path.display());

    let content = fs::read_to_string(path).map_err(|source| CliError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;

    let cards = parse(&content);
    tracing::debug!(cards = cards.len(), "loaded card file");
    Ok(cards)
}

/// Load, render and write the document described by `config`.
pub fn export(config: &Config) -> Result<ExportSummary> {
    let renderer = get_renderer(&config.format, &config.render_options())
        .ok_or_else(|| CliError::UnknownFormat(config.format.clone()))?;

    let cards = load_cards(&config.input)?;
    let document = renderer.render(&cards);

    match &config.output {
        Some(path) => write_output(path, &document, config.force)?,
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(document.as_bytes())
                .and_then(|_| handle.flush())
                .map_err(|source| CliError::WriteOutput {
                    path: PathBuf::from("<stdout>"),
                    source,
                })?;
        }
    }

    Ok(ExportSummary {
        cards: cards.len(),
        format: renderer.name().to_string(),
        output: config.output.clone(),
    })
}

/// Write the document, refusing to replace an existing file unless forced.
pub fn write_output(path: &Path, document: &str, force: bool) -> Result<()> {
    let mut options = OpenOptions::new();
    options.write(true);
    if force {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }

    let mut file = options.open(path).map_err(|source| {
        if source.kind() == io::ErrorKind::AlreadyExists {
            CliError::OutputExists(path.to_path_buf())
        } else {
            CliError::WriteOutput {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    file.write_all(document.as_bytes())
        .map_err(|source| CliError::WriteOutput {
            path: path.to_path_buf(),
            source,
        })
}
