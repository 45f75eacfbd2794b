use search_core::{DocumentStatus, RequestQueue, SearchServer, REQUEST_WINDOW};

fn server() -> SearchServer {
    let mut server = SearchServer::new(["and", "in", "at"]).unwrap();
    server.add_document(1, "curly cat curly tail", DocumentStatus::Active, &[7, 2, 7]).unwrap();
    server.add_document(2, "curly dog and fancy collar", DocumentStatus::Active, &[1, 2, 3]).unwrap();
    server.add_document(3, "big cat fancy collar ", DocumentStatus::Active, &[1, 2, 8]).unwrap();
    server.add_document(4, "big dog sparrow Eugene", DocumentStatus::Active, &[1, 3, 2]).unwrap();
    server.add_document(5, "big dog sparrow Vasiliy", DocumentStatus::Active, &[1, 1, 1]).unwrap();
    server
}

#[test]
fn window_evicts_oldest_requests() {
    let server = server();
    let mut queue = RequestQueue::new(&server);
    assert_eq!(queue.capacity(), REQUEST_WINDOW);
    for _ in 0..1439 {
        queue.add_find_request("empty request").unwrap();
    }
    assert_eq!(queue.get_no_result_requests(), 1439);
    // the window is full after this one; nothing evicted yet
    queue.add_find_request("curly dog").unwrap();
    assert_eq!(queue.get_no_result_requests(), 1439);
    // each new request pushes one empty request out
    queue.add_find_request("big collar").unwrap();
    assert_eq!(queue.get_no_result_requests(), 1438);
    queue.add_find_request("sparrow").unwrap();
    assert_eq!(queue.get_no_result_requests(), 1437);
    assert_eq!(queue.len(), REQUEST_WINDOW);
}

#[test]
fn window_plus_one_requests() {
    let server = server();
    let mut queue = RequestQueue::new(&server);
    queue.add_find_request("nothing here").unwrap();
    for _ in 0..REQUEST_WINDOW {
        queue.add_find_request("curly").unwrap();
    }
    assert_eq!(queue.len(), REQUEST_WINDOW);
    assert_eq!(queue.get_no_result_requests(), 0);
}

#[test]
fn results_are_passed_through() {
    let server = server();
    let mut queue = RequestQueue::new(&server);
    let direct = server.find_top_documents("curly dog").unwrap();
    let queued = queue.add_find_request("curly dog").unwrap();
    assert_eq!(direct, queued);
    let banned = queue.add_find_request_by_status("curly dog", DocumentStatus::Banned).unwrap();
    assert!(banned.is_empty());
    let rated = queue.add_find_request_with("big", |_, _, rating| rating >= 3).unwrap();
    assert_eq!(rated.iter().map(|d| d.id).collect::<Vec<_>>(), vec![3]);
    assert_eq!(queue.get_no_result_requests(), 1);
}

#[test]
fn rejected_query_is_not_recorded() {
    let server = server();
    let mut queue = RequestQueue::new(&server);
    assert_eq!(queue.get_no_result_requests(), 0);
    assert!(queue.add_find_request("--broken").is_err());
    assert!(queue.is_empty());
}
