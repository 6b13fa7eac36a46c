use booklet_impose::*;

#[test]
fn test_stats_no_pages() {
    let result = calculate_statistics(0);
    assert!(result.is_err());
    match result {
        Err(BookletError::NoPages) => {}
        _ => panic!("Expected NoPages error"),
    }
}

#[test]
fn test_stats_aligned_booklet() {
    let stats = calculate_statistics(16).unwrap();

    assert_eq!(stats.source_pages, 16);
    assert_eq!(stats.padded_pages, 16);
    assert_eq!(stats.blank_pages_added, 0);
    // 16 pages / 4 pages per sheet = 4 sheets
    assert_eq!(stats.sheets, 4);
    // 4 sheets * 2 pages on each face
    assert_eq!(stats.pages_per_face, 8);
}

#[test]
fn test_stats_padded_booklet() {
    let stats = calculate_statistics(10).unwrap();

    assert_eq!(stats.source_pages, 10);
    // 10 pages padded to 12
    assert_eq!(stats.padded_pages, 12);
    assert_eq!(stats.blank_pages_added, 2);
    assert_eq!(stats.sheets, 3);
    assert_eq!(stats.pages_per_face, 6);
}

#[test]
fn test_stats_single_page() {
    let stats = calculate_statistics(1).unwrap();

    assert_eq!(stats.padded_pages, 4);
    assert_eq!(stats.blank_pages_added, 3);
    assert_eq!(stats.sheets, 1);
}

#[test]
fn test_stats_agree_with_imposition() {
    for page_count in [1, 2, 3, 7, 9, 24, 41] {
        let stats = calculate_statistics(page_count).unwrap();
        let plan = impose(page_count);

        assert_eq!(stats.padded_pages, plan.padded_count());
        assert_eq!(stats.blank_pages_added, plan.blank_count());
        assert_eq!(stats.sheets, plan.sheet_count());
        assert_eq!(stats.pages_per_face, plan.front.len());
    }
}
