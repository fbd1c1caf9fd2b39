//! Common test utilities for CLI integration tests.

pub mod fixtures;

use std::path::PathBuf;

use mdcards_cli::config::Config;
use tempfile::TempDir;

/// Scratch directory holding an input deck.
pub struct TestContext {
    pub dir: TempDir,
    pub input: PathBuf,
}

impl TestContext {
    /// Create a temp directory and write `content` to `cards.md` inside it.
    pub fn with_deck(content: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let input = dir.path().join("cards.md");
        std::fs::write(&input, content).expect("Failed to write deck");
        Self { dir, input }
    }

    pub fn output_path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Config exporting the deck to `output` in the given format.
    pub fn config(&self, format: &str, output: Option<PathBuf>) -> Config {
        Config {
            input: self.input.clone(),
            output,
            format: format.to_string(),
            lang: "en".to_string(),
            force: false,
        }
    }
}
