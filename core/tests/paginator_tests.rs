use search_core::{paginate, DocumentStatus, SearchServer};

#[test]
fn paginates_ranked_results() {
    let mut server = SearchServer::new(["and", "with"]).unwrap();
    server.add_document(1, "funny pet and nasty rat", DocumentStatus::Active, &[7, 2, 7]).unwrap();
    server.add_document(2, "funny pet with curly hair", DocumentStatus::Active, &[1, 2, 3]).unwrap();
    server.add_document(3, "big cat nasty hair", DocumentStatus::Active, &[1, 2, 8]).unwrap();
    server.add_document(4, "big dog cat Vladislav", DocumentStatus::Active, &[1, 3, 2]).unwrap();
    server.add_document(5, "big dog hamster Borya", DocumentStatus::Active, &[1, 1, 1]).unwrap();

    let results = server.find_top_documents("curly dog").unwrap();
    assert_eq!(results.len(), 3);
    let pages = paginate(&results, 2);
    assert_eq!(pages.len(), 2);
    let mut seen = Vec::new();
    for page in &pages {
        assert!(!page.is_empty() && page.len() <= 2);
        seen.extend(page.iter().map(|d| d.id));
    }
    assert_eq!(seen, results.iter().map(|d| d.id).collect::<Vec<_>>());
}
