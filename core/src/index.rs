use crate::{DocumentId, DocumentStatus};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentData {
    pub rating: i32,
    pub status: DocumentStatus,
}

/// Word -> (document id -> term frequency), plus per-document metadata and insertion order.
/// Postings are ordered by document id.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    word_to_document_freqs: BTreeMap<String, BTreeMap<DocumentId, f64>>,
    documents: BTreeMap<DocumentId, DocumentData>,
    document_order: Vec<DocumentId>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains_document(&self, id: DocumentId) -> bool {
        self.documents.contains_key(&id)
    }

    /// Store a document whose words are already stop-word filtered. Each occurrence adds
    /// `1 / words.len()` to that word's frequency. Callers validate `id` beforehand.
    pub fn insert(&mut self, id: DocumentId, words: &[&str], data: DocumentData) {
        if !words.is_empty() {
            let inv_word_count = 1.0 / words.len() as f64;
            for word in words {
                *self
                    .word_to_document_freqs
                    .entry((*word).to_string())
                    .or_default()
                    .entry(id)
                    .or_insert(0.0) += inv_word_count;
            }
        }
        self.documents.insert(id, data);
        self.document_order.push(id);
    }

    pub fn postings(&self, word: &str) -> Option<&BTreeMap<DocumentId, f64>> {
        self.word_to_document_freqs.get(word)
    }

    pub fn word_in_document(&self, word: &str, id: DocumentId) -> bool {
        self.postings(word).is_some_and(|p| p.contains_key(&id))
    }

    /// Natural-log IDF of an indexed word; `None` when the word is absent.
    pub fn inverse_document_freq(&self, word: &str) -> Option<f64> {
        let postings = self.postings(word)?;
        Some((self.documents.len() as f64 / postings.len() as f64).ln())
    }

    pub fn document(&self, id: DocumentId) -> Option<&DocumentData> {
        self.documents.get(&id)
    }

    pub fn num_docs(&self) -> usize {
        self.documents.len()
    }

    pub fn document_order(&self) -> &[DocumentId] {
        &self.document_order
    }
}
