use booklet_impose::*;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

fn media_box(width: i64, height: i64) -> Object {
    Object::Array(vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Integer(width),
        Object::Integer(height),
    ])
}

fn add_marked_page(doc: &mut Document, parent_id: ObjectId, number: usize) -> ObjectId {
    let content = format!("% page {}", number);
    let content_id = doc.add_object(Stream::new(Dictionary::new(), content.into_bytes()));
    doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Page".to_vec())),
        ("Parent", Object::Reference(parent_id)),
        ("Contents", Object::Reference(content_id)),
    ]))
}

fn finish(doc: &mut Document, pages_id: ObjectId, pages_dict: Dictionary) {
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));
    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));
    doc.trailer.set("Root", catalog_id);
}

/// Flat document whose page `n` has the content stream `% page n`.
/// The first page is 300x400, the rest 612x792.
fn create_test_pdf(num_pages: usize) -> Document {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let mut kids = Vec::new();
    for number in 1..=num_pages {
        let page_id = add_marked_page(&mut doc, pages_id, number);
        let (width, height) = if number == 1 { (300, 400) } else { (612, 792) };
        if let Ok(Object::Dictionary(page)) = doc.get_object_mut(page_id) {
            page.set("MediaBox", media_box(width, height));
            page.set("Resources", Object::Dictionary(Dictionary::new()));
        }
        kids.push(Object::Reference(page_id));
    }

    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(kids)),
        ("Count", Object::Integer(num_pages as i64)),
    ]);
    finish(&mut doc, pages_id, pages_dict);
    doc
}

/// Document with a two-level page tree. MediaBox and a shared font
/// resource live on the root node only.
fn create_nested_pdf(num_pages: usize) -> Document {
    let mut doc = Document::with_version("1.7");
    let root_id = doc.new_object_id();
    let branch_id = doc.new_object_id();

    let font_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Font".to_vec())),
        ("Subtype", Object::Name(b"Type1".to_vec())),
        ("BaseFont", Object::Name(b"Helvetica".to_vec())),
    ]));
    let resources_id = doc.add_object(Dictionary::from_iter(vec![(
        "Font",
        Object::Dictionary(Dictionary::from_iter(vec![("F1", Object::Reference(font_id))])),
    )]));

    let kids: Vec<Object> = (1..=num_pages)
        .map(|number| Object::Reference(add_marked_page(&mut doc, branch_id, number)))
        .collect();

    doc.objects.insert(
        branch_id,
        Object::Dictionary(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Parent", Object::Reference(root_id)),
            ("Kids", Object::Array(kids)),
            ("Count", Object::Integer(num_pages as i64)),
        ])),
    );

    let root_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(vec![Object::Reference(branch_id)])),
        ("Count", Object::Integer(num_pages as i64)),
        ("MediaBox", media_box(500, 700)),
        ("Resources", Object::Reference(resources_id)),
    ]);
    finish(&mut doc, root_id, root_dict);
    doc
}

fn page_markers(doc: &Document) -> Vec<String> {
    doc.get_pages()
        .values()
        .map(|&id| {
            let page = doc.get_dictionary(id).unwrap();
            let content_id = page.get(b"Contents").unwrap().as_reference().unwrap();
            let stream = doc.get_object(content_id).unwrap().as_stream().unwrap();
            let content = stream
                .decompressed_content()
                .unwrap_or_else(|_| stream.content.clone());
            String::from_utf8(content).unwrap()
        })
        .collect()
}

fn page_attribute(doc: &Document, page_number: u32, key: &[u8]) -> Object {
    let id = doc.get_pages()[&page_number];
    doc.get_dictionary(id).unwrap().get(key).unwrap().clone()
}

#[test]
fn test_page_count() {
    assert_eq!(page_count(&create_test_pdf(7)), 7);
    assert_eq!(page_count(&create_nested_pdf(3)), 3);
}

#[test]
fn test_materialize_five_pages() {
    let source = create_test_pdf(5);
    let range = validate(PageRange::new(1, 5), Some(5), ValidationPolicy::Lenient).unwrap();
    let plan = impose(range.page_count());

    let (front, back) = materialize(&source, &range, &plan).unwrap();

    assert_eq!(page_markers(&front), vec!["", "% page 1", "", "% page 3"]);
    assert_eq!(page_markers(&back), vec!["% page 2", "", "% page 4", "% page 5"]);
}

#[test]
fn test_materialize_sub_range_uses_absolute_pages() {
    let source = create_test_pdf(12);
    let range = validate(PageRange::new(5, 12), Some(12), ValidationPolicy::Strict).unwrap();
    let plan = impose(range.page_count());

    let front = materialize_face(&source, range.start, &plan.front).unwrap();
    assert_eq!(
        page_markers(&front),
        vec!["% page 12", "% page 5", "% page 10", "% page 7"]
    );
}

#[test]
fn test_blank_pages_use_first_page_media_box() {
    let source = create_test_pdf(6);
    let plan = impose(6);

    // Sheet 0 front: [blank, 1]
    let front = materialize_face(&source, 1, &plan.front).unwrap();
    assert_eq!(page_attribute(&front, 1, b"MediaBox"), media_box(300, 400));
    // Copied pages keep their own size
    assert_eq!(page_attribute(&front, 3, b"MediaBox"), media_box(612, 792));
}

#[test]
fn test_materialize_page_outside_document() {
    let source = create_test_pdf(4);
    let result = materialize_face(&source, 3, &[PageIndex::Page(4)]);
    match result {
        Err(BookletError::Config(msg)) => assert!(msg.contains("Page 6")),
        _ => panic!("Expected Config error"),
    }
}

#[test]
fn test_materialize_resolves_inherited_attributes() {
    let source = create_nested_pdf(4);
    let plan = impose(4);

    let front = materialize_face(&source, 1, &plan.front).unwrap();
    assert_eq!(page_markers(&front), vec!["% page 4", "% page 1"]);

    for number in [1, 2] {
        assert_eq!(page_attribute(&front, number, b"MediaBox"), media_box(500, 700));
        let resources = page_attribute(&front, number, b"Resources");
        let resources = front.get_dictionary(resources.as_reference().unwrap()).unwrap();
        assert!(resources.has(b"Font"));
    }

    // The shared resource dictionary is copied once
    let first = page_attribute(&front, 1, b"Resources");
    let second = page_attribute(&front, 2, b"Resources");
    assert_eq!(first, second);
}

#[test]
fn test_materialize_blank_in_nested_document() {
    let source = create_nested_pdf(2);
    let plan = impose(2);

    let back = materialize_face(&source, 1, &plan.back).unwrap();
    assert_eq!(page_markers(&back), vec!["% page 2", ""]);
    assert_eq!(page_attribute(&back, 2, b"MediaBox"), media_box(500, 700));
}

#[tokio::test]
async fn test_load_and_save_pdf() {
    use tempfile::NamedTempFile;

    let doc = create_test_pdf(3);
    let temp = NamedTempFile::new().unwrap();

    save_pdf(doc, temp.path()).await.unwrap();

    let loaded = load_pdf(temp.path()).await.unwrap();
    assert_eq!(loaded.get_pages().len(), 3);
    assert_eq!(page_markers(&loaded)[2], "% page 3");
}

#[tokio::test]
async fn test_prepare_booklet() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("novel.pdf");
    save_pdf(create_test_pdf(10), &input).await.unwrap();

    let options = BookletOptions {
        start: 3,
        ..Default::default()
    };
    let prepared = prepare_booklet(&input, &options, dir.path()).await.unwrap();

    assert_eq!(prepared.front_path, dir.path().join("novel_front.pdf"));
    assert_eq!(prepared.back_path, dir.path().join("novel_back.pdf"));
    // Pages 3..=10 are 8 pages, no padding
    assert_eq!(prepared.range.page_count(), 8);
    assert!(prepared.range.advisory().is_none());

    let front = Document::load(&prepared.front_path).unwrap();
    let back = Document::load(&prepared.back_path).unwrap();
    assert_eq!(
        page_markers(&front),
        vec!["% page 10", "% page 3", "% page 8", "% page 5"]
    );
    assert_eq!(
        page_markers(&back),
        vec!["% page 4", "% page 9", "% page 6", "% page 7"]
    );
}

#[tokio::test]
async fn test_prepare_booklet_pads_unaligned_range() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("short.pdf");
    save_pdf(create_test_pdf(6), &input).await.unwrap();

    let prepared = prepare_booklet(&input, &BookletOptions::default(), dir.path())
        .await
        .unwrap();

    let advisory = prepared.range.advisory().unwrap();
    assert_eq!(advisory.padding_needed, 2);

    let front = Document::load(&prepared.front_path).unwrap();
    let back = Document::load(&prepared.back_path).unwrap();
    assert_eq!(front.get_pages().len(), 4);
    assert_eq!(back.get_pages().len(), 4);
}

#[tokio::test]
async fn test_prepare_booklet_out_of_bounds() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("doc.pdf");
    save_pdf(create_test_pdf(12), &input).await.unwrap();

    let options = BookletOptions {
        start: 10,
        end: Some(15),
        ..Default::default()
    };
    let result = prepare_booklet(&input, &options, dir.path()).await;
    match result {
        Err(BookletError::Validation(ValidationError::OutOfBounds {
            end,
            document_length,
        })) => {
            assert_eq!(end, 15);
            assert_eq!(document_length, 12);
        }
        _ => panic!("Expected OutOfBounds error"),
    }
    assert!(!dir.path().join("doc_front.pdf").exists());
    assert!(!dir.path().join("doc_back.pdf").exists());
}

#[tokio::test]
async fn test_prepare_booklet_no_pages() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty.pdf");
    save_pdf(create_test_pdf(0), &input).await.unwrap();

    let result = prepare_booklet(&input, &BookletOptions::default(), dir.path()).await;
    assert!(matches!(result, Err(BookletError::NoPages)));
}
