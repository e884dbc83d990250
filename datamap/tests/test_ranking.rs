use std::path::PathBuf;

use datamap::{RankBook, RankRecord, CASUAL_MODE, CHALLENGING_MODE, RANK_MAX_COUNT};

fn rank_book(name: &str) -> (RankBook, PathBuf) {
    let path = std::env::temp_dir().join(format!(
        "kitchen-rank-{}-{}.json",
        name,
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    (RankBook::new(&path), path)
}

#[test]
fn test_missing_file_gives_empty_ranking() {
    let (book, _) = rank_book("missing");

    assert!(book.load().rank_list.is_empty());
    assert!(book.list(CASUAL_MODE).is_empty());
}

#[test]
fn test_broken_file_gives_empty_ranking() {
    let (book, path) = rank_book("broken");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(book.load().rank_list.is_empty());
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_records_sorted_by_merit_per_mode() {
    let (book, path) = rank_book("sorted");

    book.add_casual(3).unwrap();
    book.add_casual(7).unwrap();
    book.add_challenging(40).unwrap();
    book.add_challenging(90).unwrap();
    book.add_casual(5).unwrap();

    let casual: Vec<u32> = book
        .list(CASUAL_MODE)
        .iter()
        .map(|record| record.dishes_count)
        .collect();
    let challenging: Vec<u32> = book
        .list(CHALLENGING_MODE)
        .iter()
        .map(|record| record.score)
        .collect();
    assert_eq!(casual, vec![7, 5, 3]);
    assert_eq!(challenging, vec![90, 40]);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_only_best_records_are_kept() {
    let (book, path) = rank_book("truncated");

    for dishes in 0..15 {
        book.add_casual(dishes).unwrap();
    }
    book.add_challenging(10).unwrap();

    let casual = book.list(CASUAL_MODE);
    assert_eq!(casual.len(), RANK_MAX_COUNT);
    assert_eq!(casual.first().unwrap().dishes_count, 14);
    assert_eq!(casual.last().unwrap().dishes_count, 5);
    assert_eq!(book.list(CHALLENGING_MODE).len(), 1);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_file_uses_camel_case_fields() {
    let (book, path) = rank_book("format");

    book.add(RankRecord::casual(4, "2024-01-02 03:04".to_string()))
        .unwrap();

    let json = std::fs::read_to_string(&path).unwrap();
    assert!(json.contains("\"rankList\""));
    assert!(json.contains("\"dishesCount\": 4"));
    assert!(json.contains("\"time\": \"2024-01-02 03:04\""));
    book.clear().unwrap();
    assert!(book.load().rank_list.is_empty());
    let _ = std::fs::remove_file(&path);
}
