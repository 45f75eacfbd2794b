use serde::{Deserialize, Serialize};

/// Upper bound on the number of documents a single query returns.
pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;
/// Relevance values closer than this are treated as equal and ordered by rating.
pub const RELEVANCE_EPSILON: f64 = 1e-6;
/// Number of requests (one day of per-minute requests) kept by the request history.
pub const REQUEST_WINDOW: usize = 1440;

/// Ranking and history knobs. Missing fields fall back to the constants above.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub max_result_document_count: usize,
    pub relevance_epsilon: f64,
    pub request_window: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_result_document_count: MAX_RESULT_DOCUMENT_COUNT,
            relevance_epsilon: RELEVANCE_EPSILON,
            request_window: REQUEST_WINDOW,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let cfg = SearchConfig::default();
        assert_eq!(cfg.max_result_document_count, 5);
        assert_eq!(cfg.relevance_epsilon, 1e-6);
        assert_eq!(cfg.request_window, 1440);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg: SearchConfig = serde_json::from_str(r#"{ "max_result_document_count": 10 }"#).unwrap();
        assert_eq!(cfg.max_result_document_count, 10);
        assert_eq!(cfg.request_window, REQUEST_WINDOW);
    }
}
