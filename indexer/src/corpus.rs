use anyhow::{bail, Context, Result};
use search_core::{DocumentId, DocumentStatus, SearchServer};
use serde::Deserialize;
use walkdir::WalkDir;

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InputDoc {
    pub id: DocumentId,
    pub text: String,
    #[serde(default)]
    pub status: DocumentStatus,
    #[serde(default)]
    pub ratings: Vec<i32>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    pub added: usize,
    pub skipped: usize,
}

/// `.json`/`.jsonl` files under `input` (or `input` itself when it is a file), in name order.
pub fn collect_files(input: &Path) -> Result<Vec<PathBuf>> {
    if !input.exists() {
        bail!("input {} does not exist", input.display());
    }
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }
    let files = WalkDir::new(input)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|p| p.is_file())
        .filter(|p| matches!(p.extension().and_then(|s| s.to_str()), Some("json" | "jsonl")))
        .collect();
    Ok(files)
}

/// Parse one file: JSONL line by line, otherwise a JSON array or a single object.
pub fn read_documents(file: &Path) -> Result<Vec<InputDoc>> {
    if file.extension().and_then(|s| s.to_str()) == Some("jsonl") {
        let reader = BufReader::new(File::open(file).with_context(|| format!("open {}", file.display()))?);
        let mut docs = Vec::new();
        for (lineno, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let doc = serde_json::from_str(&line)
                .with_context(|| format!("{}:{}: malformed document", file.display(), lineno + 1))?;
            docs.push(doc);
        }
        return Ok(docs);
    }

    let raw = fs::read_to_string(file).with_context(|| format!("read {}", file.display()))?;
    let json: serde_json::Value =
        serde_json::from_str(&raw).with_context(|| format!("{}: malformed JSON", file.display()))?;
    let docs = match json {
        serde_json::Value::Array(arr) => arr
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<InputDoc>, _>>()
            .with_context(|| format!("{}: malformed document", file.display()))?,
        serde_json::Value::Object(_) => vec![serde_json::from_value(json)
            .with_context(|| format!("{}: malformed document", file.display()))?],
        _ => Vec::new(),
    };
    Ok(docs)
}

/// Add every document found under `input`. Documents the engine rejects are logged and skipped.
pub fn load_corpus(server: &mut SearchServer, input: &Path) -> Result<LoadStats> {
    let mut stats = LoadStats::default();
    for file in collect_files(input)? {
        for doc in read_documents(&file)? {
            match server.add_document(doc.id, &doc.text, doc.status, &doc.ratings) {
                Ok(()) => stats.added += 1,
                Err(err) => {
                    tracing::warn!(file = %file.display(), id = doc.id, %err, "skipping document");
                    stats.skipped += 1;
                }
            }
        }
    }
    tracing::info!(added = stats.added, skipped = stats.skipped, "corpus loaded");
    Ok(stats)
}
