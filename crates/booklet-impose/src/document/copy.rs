//! Copying pages between documents

use crate::constants::{DEFAULT_PAGE_DIMENSIONS, INHERITABLE_PAGE_KEYS, MAX_PAGE_TREE_DEPTH};
use crate::types::Result;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

// =============================================================================
// Page Copy
// =============================================================================

/// Copy a source page into `output` as a child of `parent_id`.
///
/// Inherited attributes (MediaBox, Resources, ...) are resolved and written
/// onto the copy, since the copy lives in a flat page tree. Annotations are
/// not carried over.
pub(crate) fn copy_page(
    output: &mut Document,
    source: &Document,
    page_id: ObjectId,
    parent_id: ObjectId,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<ObjectId> {
    let page_dict = source.get_dictionary(page_id)?;

    let mut new_page = Dictionary::new();
    new_page.set("Type", Object::Name(b"Page".to_vec()));
    new_page.set("Parent", Object::Reference(parent_id));

    for key in INHERITABLE_PAGE_KEYS {
        if let Some(value) = inherited_attribute(source, page_id, key) {
            new_page.set(key, copy_object_deep(output, source, &value, cache)?);
        }
    }
    if !new_page.has(b"MediaBox") {
        new_page.set("MediaBox", Object::Array(default_media_box()));
    }

    if let Ok(contents) = page_dict.get(b"Contents") {
        new_page.set("Contents", copy_object_deep(output, source, contents, cache)?);
    }

    Ok(output.add_object(new_page))
}

/// Look up a page attribute, walking up the page tree when the page itself
/// does not define it.
pub(crate) fn inherited_attribute(doc: &Document, page_id: ObjectId, key: &[u8]) -> Option<Object> {
    let mut current = doc.get_dictionary(page_id).ok()?;

    for _ in 0..MAX_PAGE_TREE_DEPTH {
        if let Ok(value) = current.get(key) {
            return Some(value.clone());
        }
        let parent = current.get(b"Parent").and_then(Object::as_reference).ok()?;
        current = doc.get_dictionary(parent).ok()?;
    }

    None
}

/// MediaBox of the document's first page, or US Letter when unavailable
pub(crate) fn first_page_media_box(doc: &Document) -> Vec<Object> {
    doc.get_pages()
        .values()
        .next()
        .and_then(|&id| inherited_attribute(doc, id, b"MediaBox"))
        .and_then(|obj| resolve(doc, obj).as_array().ok().cloned())
        .unwrap_or_else(default_media_box)
}

fn resolve(doc: &Document, obj: Object) -> Object {
    match obj {
        Object::Reference(id) => doc.get_object(id).cloned().unwrap_or(Object::Null),
        other => other,
    }
}

/// Get default MediaBox for US Letter size
fn default_media_box() -> Vec<Object> {
    vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Integer(DEFAULT_PAGE_DIMENSIONS.0 as i64),
        Object::Integer(DEFAULT_PAGE_DIMENSIONS.1 as i64),
    ]
}

// =============================================================================
// Deep Copy
// =============================================================================

/// Deep copy an object from source to output document, following references.
///
/// Uses a cache so shared resources (fonts, images) are copied once per
/// output document. `Parent` links are dropped: they point back into the
/// source page tree.
pub(crate) fn copy_object_deep(
    output: &mut Document,
    source: &Document,
    obj: &Object,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<Object> {
    match obj {
        Object::Reference(id) => {
            if let Some(&new_id) = cache.get(id) {
                return Ok(Object::Reference(new_id));
            }

            // Reserve the id before recursing so self-references terminate
            let new_id = output.new_object_id();
            cache.insert(*id, new_id);

            let referenced = source.get_object(*id)?;
            let copied = copy_object_deep(output, source, referenced, cache)?;
            output.objects.insert(new_id, copied);

            Ok(Object::Reference(new_id))
        }
        Object::Dictionary(dict) => Ok(Object::Dictionary(copy_dictionary(
            output, source, dict, cache,
        )?)),
        Object::Array(arr) => {
            let new_arr: Result<Vec<_>> = arr
                .iter()
                .map(|item| copy_object_deep(output, source, item, cache))
                .collect();
            Ok(Object::Array(new_arr?))
        }
        Object::Stream(stream) => {
            let dict = copy_dictionary(output, source, &stream.dict, cache)?;
            let mut copied = Stream::new(dict, stream.content.clone());
            copied.allows_compression = stream.allows_compression;
            Ok(Object::Stream(copied))
        }
        // Primitive types: just clone
        _ => Ok(obj.clone()),
    }
}

fn copy_dictionary(
    output: &mut Document,
    source: &Document,
    dict: &Dictionary,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<Dictionary> {
    let mut new_dict = Dictionary::new();
    for (key, value) in dict.iter() {
        if key.as_slice() == b"Parent" {
            continue;
        }
        new_dict.set(key.clone(), copy_object_deep(output, source, value, cache)?);
    }
    Ok(new_dict)
}
