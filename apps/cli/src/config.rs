//! Command-line and environment configuration.

use clap::Parser;
use mdcards_core::RenderOptions;
use std::path::PathBuf;

/// Convert a markdown flashcard file into a study document.
#[derive(Debug, Clone, Parser)]
#[command(name = "mdcards", version, about)]
pub struct Config {
    /// Markdown file containing the cards
    #[arg(env = "MDCARDS_INPUT")]
    pub input: PathBuf,

    /// Output file; the document is written to stdout when omitted
    #[arg(short, long, env = "MDCARDS_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Output format: html, anki, json or text
    #[arg(short, long, env = "MDCARDS_FORMAT", default_value = "html")]
    pub format: String,

    /// Language attribute of the generated HTML page
    #[arg(long, env = "MDCARDS_HTML_LANG", default_value = "en")]
    pub lang: String,

    /// Overwrite the output file if it already exists
    #[arg(long)]
    pub force: bool,
}

impl Config {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            html_lang: self.lang.clone(),
        }
    }
}
