use crate::error::Result;
use crate::search_server::{status_filter, SearchServer};
use crate::{Document, DocumentId, DocumentStatus};
use std::collections::VecDeque;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct QueryResult {
    has_results: bool,
    /// Empty-result requests in the window right after this record was pushed.
    no_results: usize,
}

/// Sliding window over the most recent search requests, tracking how many came back empty.
///
/// Borrows the engine; the window holds at most `capacity` records and drops the oldest first.
#[derive(Debug)]
pub struct RequestQueue<'a> {
    server: &'a SearchServer,
    requests: VecDeque<QueryResult>,
    capacity: usize,
    no_result_count: usize,
}

impl<'a> RequestQueue<'a> {
    /// Window size comes from the server's [`SearchConfig`](crate::SearchConfig).
    pub fn new(server: &'a SearchServer) -> Self {
        Self::with_capacity(server, server.config().request_window)
    }

    pub fn with_capacity(server: &'a SearchServer, capacity: usize) -> Self {
        Self {
            server,
            requests: VecDeque::new(),
            capacity,
            no_result_count: 0,
        }
    }

    pub fn add_find_request(&mut self, raw_query: &str) -> Result<Vec<Document>> {
        self.add_find_request_by_status(raw_query, DocumentStatus::Active)
    }

    pub fn add_find_request_by_status(&mut self, raw_query: &str, status: DocumentStatus) -> Result<Vec<Document>> {
        self.add_find_request_with(raw_query, status_filter(status))
    }

    /// Run the query and record whether it found anything. Rejected queries are not recorded.
    pub fn add_find_request_with<P>(&mut self, raw_query: &str, predicate: P) -> Result<Vec<Document>>
    where
        P: Fn(DocumentId, DocumentStatus, i32) -> bool,
    {
        let result = self.server.find_top_documents_with(raw_query, predicate)?;
        self.push(!result.is_empty());
        Ok(result)
    }

    pub fn get_no_result_requests(&self) -> usize {
        self.requests.back().map_or(0, |r| r.no_results)
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn push(&mut self, has_results: bool) {
        if self.capacity == 0 {
            return;
        }
        if self.requests.len() >= self.capacity {
            if let Some(oldest) = self.requests.pop_front() {
                if !oldest.has_results {
                    self.no_result_count -= 1;
                }
                debug!(evicted_empty = !oldest.has_results, "request window full");
            }
        }
        if !has_results {
            self.no_result_count += 1;
        }
        self.requests.push_back(QueryResult { has_results, no_results: self.no_result_count });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_keeps_count_in_sync() {
        let server = SearchServer::new(["and"]).unwrap();
        let mut rq = RequestQueue::with_capacity(&server, 3);
        rq.push(false);
        rq.push(true);
        rq.push(false);
        assert_eq!(rq.get_no_result_requests(), 2);
        rq.push(true);
        assert_eq!(rq.get_no_result_requests(), 1);
        rq.push(true);
        rq.push(true);
        assert_eq!(rq.get_no_result_requests(), 0);
        assert_eq!(rq.len(), 3);
    }

    #[test]
    fn huge_window_does_not_preallocate() {
        let config = crate::SearchConfig { request_window: usize::MAX, ..Default::default() };
        let server = SearchServer::with_config(["and"], config).unwrap();
        let mut rq = RequestQueue::new(&server);
        assert_eq!(rq.capacity(), usize::MAX);
        assert!(rq.add_find_request("nothing").unwrap().is_empty());
        assert_eq!(rq.len(), 1);
        assert_eq!(rq.get_no_result_requests(), 1);
    }

    #[test]
    fn zero_capacity_records_nothing() {
        let server = SearchServer::new(Vec::<String>::new()).unwrap();
        let mut rq = RequestQueue::with_capacity(&server, 0);
        rq.add_find_request("anything").unwrap();
        assert!(rq.is_empty());
        assert_eq!(rq.get_no_result_requests(), 0);
    }
}
