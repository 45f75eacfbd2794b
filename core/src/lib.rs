//! In-memory TF-IDF document index with plus/minus term queries.
//!
//! Documents are added with a caller-chosen id, a [`DocumentStatus`] and a
//! list of ratings. Queries return at most
//! [`MAX_RESULT_DOCUMENT_COUNT`] documents ordered by relevance, with the
//! average rating breaking near-ties.

pub mod config;
pub mod error;
pub mod index;
pub mod paginator;
pub mod query;
pub mod request_queue;
pub mod search_server;
pub mod tokenizer;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use config::{SearchConfig, MAX_RESULT_DOCUMENT_COUNT, RELEVANCE_EPSILON, REQUEST_WINDOW};
pub use error::{Result, SearchError};
pub use paginator::{paginate, Paginator};
pub use request_queue::RequestQueue;
pub use search_server::{status_filter, SearchServer};

/// Caller-assigned document identifier. Negative values are rejected on insert.
pub type DocumentId = i32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    #[default]
    Active,
    Irrelevant,
    Banned,
    Removed,
}

impl DocumentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Active => "active",
            DocumentStatus::Irrelevant => "irrelevant",
            DocumentStatus::Banned => "banned",
            DocumentStatus::Removed => "removed",
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentStatus {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "active" => Ok(DocumentStatus::Active),
            "irrelevant" => Ok(DocumentStatus::Irrelevant),
            "banned" => Ok(DocumentStatus::Banned),
            "removed" => Ok(DocumentStatus::Removed),
            other => Err(SearchError::InvalidArgument(format!("unknown document status '{other}'"))),
        }
    }
}

/// A ranked hit. Derived per query, never stored by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Document {
    pub id: DocumentId,
    pub relevance: f64,
    pub rating: i32,
}

impl Document {
    pub fn new(id: DocumentId, relevance: f64, rating: i32) -> Self {
        Self { id, relevance, rating }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ document_id = {}, relevance = {}, rating = {} }}",
            self.id, self.relevance, self.rating
        )
    }
}
