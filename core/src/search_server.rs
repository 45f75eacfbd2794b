use crate::config::SearchConfig;
use crate::error::{Result, SearchError};
use crate::index::{DocumentData, InvertedIndex};
use crate::query::Query;
use crate::tokenizer::{is_valid_text, make_unique_non_empty, split_into_words};
use crate::{Document, DocumentId, DocumentStatus};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, trace};

/// Predicate accepting only documents with the given status.
pub fn status_filter(status: DocumentStatus) -> impl Fn(DocumentId, DocumentStatus, i32) -> bool + Copy {
    move |_id, document_status, _rating| document_status == status
}

/// TF-IDF search engine over short space-separated documents.
///
/// Stop words are fixed at construction. Documents are immutable once added.
#[derive(Debug)]
pub struct SearchServer {
    stop_words: BTreeSet<String>,
    index: InvertedIndex,
    config: SearchConfig,
}

impl SearchServer {
    pub fn new<I, S>(stop_words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_config(stop_words, SearchConfig::default())
    }

    /// Build from a single space-separated list of stop words, e.g. `"and in on"`.
    pub fn from_stop_words_text(text: &str) -> Result<Self> {
        Self::new(split_into_words(text))
    }

    pub fn with_config<I, S>(stop_words: I, config: SearchConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stop_words = make_unique_non_empty(stop_words);
        if let Some(bad) = stop_words.iter().find(|w| !is_valid_text(w)) {
            return Err(SearchError::invalid(format!("stop word {bad:?} contains control characters")));
        }
        Ok(Self { stop_words, index: InvertedIndex::new(), config })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn add_document(
        &mut self,
        document_id: DocumentId,
        document: &str,
        status: DocumentStatus,
        ratings: &[i32],
    ) -> Result<()> {
        if document_id < 0 {
            return Err(SearchError::invalid(format!("document id {document_id} is negative")));
        }
        if self.index.contains_document(document_id) {
            return Err(SearchError::invalid(format!("document id {document_id} already exists")));
        }
        if !is_valid_text(document) {
            return Err(SearchError::invalid(format!(
                "document {document_id} contains control characters"
            )));
        }

        let words = self.split_into_words_no_stop(document);
        let data = DocumentData { rating: compute_average_rating(ratings), status };
        self.index.insert(document_id, &words, data);
        debug!(document_id, words = words.len(), rating = data.rating, "document added");
        Ok(())
    }

    /// Top documents with [`DocumentStatus::Active`].
    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<Document>> {
        self.find_top_documents_by_status(raw_query, DocumentStatus::Active)
    }

    pub fn find_top_documents_by_status(&self, raw_query: &str, status: DocumentStatus) -> Result<Vec<Document>> {
        self.find_top_documents_with(raw_query, status_filter(status))
    }

    /// Top documents accepted by `predicate(id, status, rating)`, best first.
    pub fn find_top_documents_with<P>(&self, raw_query: &str, predicate: P) -> Result<Vec<Document>>
    where
        P: Fn(DocumentId, DocumentStatus, i32) -> bool,
    {
        let query = Query::parse(raw_query, &self.stop_words)?;
        let mut matched = self.find_all_documents(&query, predicate);
        sort_by_relevance(&mut matched, self.config.relevance_epsilon);
        matched.truncate(self.config.max_result_document_count);
        debug!(
            plus = query.plus_words.len(),
            minus = query.minus_words.len(),
            hits = matched.len(),
            "query evaluated"
        );
        Ok(matched)
    }

    pub fn get_document_count(&self) -> usize {
        self.index.num_docs()
    }

    /// Plus words of `raw_query` found in the document, sorted. Empty when any minus word
    /// is present in the document.
    pub fn match_document(&self, raw_query: &str, document_id: DocumentId) -> Result<(Vec<String>, DocumentStatus)> {
        let query = Query::parse(raw_query, &self.stop_words)?;
        let data = self
            .index
            .document(document_id)
            .ok_or(SearchError::DocumentNotFound(document_id))?;

        let vetoed = query
            .minus_words
            .iter()
            .any(|w| self.index.word_in_document(w, document_id));
        if vetoed {
            return Ok((Vec::new(), data.status));
        }
        let matched = query
            .plus_words
            .into_iter()
            .filter(|w| self.index.word_in_document(w, document_id))
            .collect();
        Ok((matched, data.status))
    }

    /// Id of the `index`-th added document.
    pub fn get_document_id(&self, index: usize) -> Result<DocumentId> {
        let order = self.index.document_order();
        order
            .get(index)
            .copied()
            .ok_or(SearchError::OutOfRange { index, len: order.len() })
    }

    /// Document ids in insertion order.
    pub fn document_ids(&self) -> impl Iterator<Item = DocumentId> + '_ {
        self.index.document_order().iter().copied()
    }

    fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    fn split_into_words_no_stop<'t>(&self, text: &'t str) -> Vec<&'t str> {
        split_into_words(text)
            .into_iter()
            .filter(|w| !self.is_stop_word(w))
            .collect()
    }

    fn find_all_documents<P>(&self, query: &Query, predicate: P) -> Vec<Document>
    where
        P: Fn(DocumentId, DocumentStatus, i32) -> bool,
    {
        let mut document_to_relevance: BTreeMap<DocumentId, f64> = BTreeMap::new();
        for word in &query.plus_words {
            let (Some(postings), Some(idf)) = (self.index.postings(word), self.index.inverse_document_freq(word)) else {
                continue;
            };
            trace!(word = word.as_str(), idf, "plus word");
            for (&id, &term_freq) in postings {
                let Some(data) = self.index.document(id) else { continue };
                if predicate(id, data.status, data.rating) {
                    *document_to_relevance.entry(id).or_insert(0.0) += term_freq * idf;
                }
            }
        }

        for word in &query.minus_words {
            if let Some(postings) = self.index.postings(word) {
                for id in postings.keys() {
                    document_to_relevance.remove(id);
                }
            }
        }

        document_to_relevance
            .into_iter()
            .filter_map(|(id, relevance)| {
                self.index.document(id).map(|d| Document::new(id, relevance, d.rating))
            })
            .collect()
    }
}

/// Truncating average; 0 for no ratings.
fn compute_average_rating(ratings: &[i32]) -> i32 {
    if ratings.is_empty() {
        return 0;
    }
    let sum: i64 = ratings.iter().map(|&r| i64::from(r)).sum();
    (sum / ratings.len() as i64) as i32
}

/// Relevance descending; results within `epsilon` of the first in their run are ordered by rating
/// descending.
fn sort_by_relevance(docs: &mut [Document], epsilon: f64) {
    docs.sort_by(|a, b| b.relevance.total_cmp(&a.relevance));
    let mut start = 0;
    while start < docs.len() {
        let mut end = start + 1;
        while end < docs.len() && (docs[start].relevance - docs[end].relevance).abs() < epsilon {
            end += 1;
        }
        docs[start..end].sort_by(|a, b| b.rating.cmp(&a.rating));
        start = end;
    }
}
