pub mod corpus;
pub mod output;

use anyhow::{Context, Result};
use search_core::{DocumentId, DocumentStatus, RequestQueue, SearchConfig, SearchServer};
use std::fs;
use std::io::Write;
use std::path::Path;

pub use corpus::{load_corpus, InputDoc, LoadStats};

/// Document filter assembled from command-line options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Filter {
    pub status: DocumentStatus,
    pub min_rating: Option<i32>,
}

impl Default for Filter {
    fn default() -> Self {
        Self { status: DocumentStatus::Active, min_rating: None }
    }
}

impl Filter {
    pub fn accepts(&self, _id: DocumentId, status: DocumentStatus, rating: i32) -> bool {
        status == self.status && self.min_rating.map_or(true, |min| rating >= min)
    }
}

/// Defaults, overlaid by an optional JSON file, overlaid by `max_results`.
pub fn load_config(path: Option<&Path>, max_results: Option<usize>) -> Result<SearchConfig> {
    let mut config: SearchConfig = match path {
        Some(p) => {
            let raw = fs::read_to_string(p).with_context(|| format!("read config {}", p.display()))?;
            serde_json::from_str(&raw).with_context(|| format!("parse config {}", p.display()))?
        }
        None => SearchConfig::default(),
    };
    if let Some(n) = max_results {
        config.max_result_document_count = n;
    }
    Ok(config)
}

pub fn build_server(stop_words: &str, config: SearchConfig, input: &Path) -> Result<SearchServer> {
    let mut server = SearchServer::with_config(search_core::tokenizer::split_into_words(stop_words), config)?;
    load_corpus(&mut server, input)?;
    Ok(server)
}

pub fn run_search<W: Write>(
    server: &SearchServer,
    query: &str,
    filter: Filter,
    page_size: Option<usize>,
    out: &mut W,
) -> Result<()> {
    let docs = server.find_top_documents_with(query, |id, status, rating| filter.accepts(id, status, rating))?;
    match page_size {
        Some(size) => output::write_pages(out, &docs, size)?,
        None => output::write_documents(out, &docs)?,
    }
    Ok(())
}

pub fn run_match<W: Write>(server: &SearchServer, query: &str, id: DocumentId, out: &mut W) -> Result<()> {
    let (words, status) = server.match_document(query, id)?;
    output::write_match(out, id, &words, status)?;
    Ok(())
}

/// Feed every non-empty line of `queries` through a [`RequestQueue`] and report how many
/// requests in the window found nothing. Returns that count.
pub fn run_batch<W: Write>(server: &SearchServer, queries: &str, filter: Filter, out: &mut W) -> Result<usize> {
    let mut queue = RequestQueue::new(server);
    for query in queries.lines().map(str::trim).filter(|q| !q.is_empty()) {
        let docs = queue.add_find_request_with(query, |id, status, rating| filter.accepts(id, status, rating))?;
        writeln!(out, "{query} -> {}", output::join_list(&docs))?;
    }
    let no_results = queue.get_no_result_requests();
    writeln!(out, "no-result requests: {no_results}")?;
    Ok(no_results)
}
