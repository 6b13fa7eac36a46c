use crate::constants::{PAGES_PER_FACE, PAGES_PER_SHEET};
use crate::imposition::padded_page_count;
use crate::types::*;

/// Calculate statistics for a booklet of `page_count` pages
pub fn calculate_statistics(page_count: usize) -> Result<BookletStatistics> {
    if page_count == 0 {
        return Err(BookletError::NoPages);
    }

    let padded_pages = padded_page_count(page_count);
    let sheets = padded_pages / PAGES_PER_SHEET;

    Ok(BookletStatistics {
        source_pages: page_count,
        padded_pages,
        blank_pages_added: padded_pages - page_count,
        sheets,
        pages_per_face: sheets * PAGES_PER_FACE,
    })
}
