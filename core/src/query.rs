use crate::error::{Result, SearchError};
use crate::tokenizer::{is_valid_text, split_into_words};
use std::collections::BTreeSet;

/// A parsed query: words that add relevance and words that veto a document.
/// Stop words never appear in either set and the two sets are disjoint.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Query {
    pub plus_words: BTreeSet<String>,
    pub minus_words: BTreeSet<String>,
}

#[derive(Debug)]
struct QueryWord<'a> {
    data: &'a str,
    is_minus: bool,
}

fn parse_query_word(word: &str) -> Result<QueryWord<'_>> {
    match word.strip_prefix('-') {
        None => Ok(QueryWord { data: word, is_minus: false }),
        Some("") => Err(SearchError::invalid("no word after '-'")),
        Some(rest) if rest.starts_with('-') => {
            Err(SearchError::invalid(format!("'--' is not a valid minus word: {word}")))
        }
        Some(rest) => Ok(QueryWord { data: rest, is_minus: true }),
    }
}

impl Query {
    /// Parse raw query text, dropping stop words. Fails on control characters, a bare
    /// `-`, or a word starting with `--`.
    pub fn parse(text: &str, stop_words: &BTreeSet<String>) -> Result<Self> {
        if !is_valid_text(text) {
            return Err(SearchError::invalid("query contains control characters"));
        }
        let mut query = Query::default();
        for word in split_into_words(text) {
            let qw = parse_query_word(word)?;
            if stop_words.contains(qw.data) {
                continue;
            }
            if qw.is_minus {
                query.minus_words.insert(qw.data.to_string());
            } else {
                query.plus_words.insert(qw.data.to_string());
            }
        }
        let minus = &query.minus_words;
        query.plus_words.retain(|w| !minus.contains(w));
        Ok(query)
    }
}
