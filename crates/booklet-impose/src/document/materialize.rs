//! Building front-face and back-face documents from an imposition plan

use super::copy::{copy_page, first_page_media_box};
use crate::types::*;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

/// Build one output document holding the pages of `sequence` in order.
///
/// Page numbers in `sequence` are local to the range beginning at
/// `range_start` (1-based). Blank entries become empty pages with the
/// MediaBox of the source's first page.
pub fn materialize_face(
    source: &Document,
    range_start: usize,
    sequence: &[PageIndex],
) -> Result<Document> {
    let pages = source.get_pages();
    let media_box = first_page_media_box(source);

    let mut output = Document::with_version("1.7");
    let pages_tree_id = output.new_object_id();
    let mut page_refs = Vec::with_capacity(sequence.len());
    let mut cache = HashMap::new();

    for entry in sequence {
        let page_id = match entry {
            PageIndex::Page(local) => {
                let absolute = range_start + local - 1;
                let source_id = u32::try_from(absolute)
                    .ok()
                    .and_then(|number| pages.get(&number))
                    .ok_or_else(|| {
                        BookletError::Config(format!(
                            "Page {} is outside the document ({} pages)",
                            absolute,
                            pages.len()
                        ))
                    })?;
                copy_page(&mut output, source, *source_id, pages_tree_id, &mut cache)?
            }
            PageIndex::Blank => create_blank_page(&mut output, &media_box, pages_tree_id),
        };
        page_refs.push(Object::Reference(page_id));
    }

    finalize_document(&mut output, pages_tree_id, page_refs);
    Ok(output)
}

/// Build the front-face and back-face documents for a validated range
pub fn materialize(
    source: &Document,
    range: &ValidatedRange,
    plan: &ImpositionPlan,
) -> Result<(Document, Document)> {
    let front = materialize_face(source, range.start, &plan.front)?;
    let back = materialize_face(source, range.start, &plan.back)?;
    Ok((front, back))
}

/// Create a blank page with the given media box
fn create_blank_page(output: &mut Document, media_box: &[Object], parent_id: ObjectId) -> ObjectId {
    let content_id = output.add_object(Stream::new(Dictionary::new(), Vec::new()));

    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent_id));
    page_dict.set("MediaBox", Object::Array(media_box.to_vec()));
    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(Dictionary::new()));

    output.add_object(page_dict)
}

/// Create pages tree and catalog, finalize document structure
fn finalize_document(output: &mut Document, pages_tree_id: ObjectId, page_refs: Vec<Object>) {
    let count = page_refs.len() as i64;
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(page_refs)),
        ("Count", Object::Integer(count)),
    ]);
    output
        .objects
        .insert(pages_tree_id, Object::Dictionary(pages_dict));

    let catalog_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_tree_id)),
    ]));

    output.trailer.set("Root", catalog_id);
}
