//! Saddle-stitch page ordering
//!
//! All pages of a booklet form a single signature: the sheets are stacked,
//! folded once down the middle and stapled along the fold. For `n` padded
//! pages, sheet `k` (0 = outermost) carries:
//!
//! - Front: [n - 2k, 2k + 1]
//! - Back: [2k + 2, n - 2k - 1]
//!
//! For 8 pages this gives fronts `[8, 1, 6, 3]` and backs `[2, 7, 4, 5]`.
//! Blank padding is appended after the last real page before the walk, so
//! blanks are spread over the outer sheets rather than the innermost one.

use crate::constants::{PAGES_PER_FACE, PAGES_PER_SHEET};
use crate::range::padding_for;
use crate::types::{ImpositionPlan, PageIndex, Sheet};

/// Page count after padding to a multiple of 4
pub fn padded_page_count(page_count: usize) -> usize {
    page_count + padding_for(page_count)
}

/// Compute the booklet page order for `page_count` logical pages.
///
/// Page numbers are 1-based and local to the imposed range. Blank padding
/// stays in place so that every physical slot is accounted for.
pub fn impose(page_count: usize) -> ImpositionPlan {
    if page_count == 0 {
        return ImpositionPlan::default();
    }

    let padded = padded_page_count(page_count);
    let pages: Vec<PageIndex> = (1..=page_count)
        .map(PageIndex::Page)
        .chain(std::iter::repeat_n(PageIndex::Blank, padded - page_count))
        .collect();

    let mut front = Vec::with_capacity(padded / 2);
    let mut back = Vec::with_capacity(padded / 2);

    for sheet in 0..padded / PAGES_PER_SHEET {
        let lo = PAGES_PER_FACE * sheet;
        let hi = padded - 1 - PAGES_PER_FACE * sheet;

        front.push(pages[hi]);
        front.push(pages[lo]);
        back.push(pages[lo + 1]);
        back.push(pages[hi - 1]);
    }

    log::debug!(
        "imposed {page_count} pages onto {} sheets ({} blank)",
        padded / PAGES_PER_SHEET,
        padded - page_count
    );

    ImpositionPlan { front, back }
}

impl PageIndex {
    /// The page number, or `None` for a blank
    pub fn page(self) -> Option<usize> {
        match self {
            PageIndex::Page(number) => Some(number),
            PageIndex::Blank => None,
        }
    }

    pub fn is_blank(self) -> bool {
        matches!(self, PageIndex::Blank)
    }
}

impl ImpositionPlan {
    pub fn is_empty(&self) -> bool {
        self.front.is_empty() && self.back.is_empty()
    }

    /// Total slots on both faces, a multiple of 4
    pub fn padded_count(&self) -> usize {
        self.front.len() + self.back.len()
    }

    /// Number of real pages in the plan
    pub fn page_count(&self) -> usize {
        self.padded_count() - self.blank_count()
    }

    pub fn blank_count(&self) -> usize {
        self.front
            .iter()
            .chain(&self.back)
            .filter(|page| page.is_blank())
            .count()
    }

    pub fn sheet_count(&self) -> usize {
        self.front.len() / PAGES_PER_FACE
    }

    /// Iterate over physical sheets, outermost first
    pub fn sheets(&self) -> impl Iterator<Item = Sheet> + '_ {
        self.front
            .chunks_exact(PAGES_PER_FACE)
            .zip(self.back.chunks_exact(PAGES_PER_FACE))
            .enumerate()
            .map(|(index, (front, back))| Sheet {
                index,
                front: [front[0], front[1]],
                back: [back[0], back[1]],
            })
    }
}
