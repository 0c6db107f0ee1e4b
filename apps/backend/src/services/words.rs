//! Loading the word snapshot from disk.

use std::path::Path;

use anyhow::Context;
use vocab_core::{Word, WordStore};

/// Parse a JSON array of word records into a validated store.
pub fn parse_words(json: &str) -> anyhow::Result<WordStore> {
    let words: Vec<Word> = serde_json::from_str(json).context("invalid word list")?;
    Ok(WordStore::new(words)?)
}

/// Load the word store from a JSON file.
pub fn load_words(path: &Path) -> anyhow::Result<WordStore> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let store = parse_words(&json).with_context(|| format!("failed to load {}", path.display()))?;
    tracing::info!(words = store.len(), path = %path.display(), "word store loaded");
    Ok(store)
}
