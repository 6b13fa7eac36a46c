//! Printer page-number lists
//!
//! Converts an imposed face sequence into the absolute page numbers typed
//! into a printer's "pages to print" field, optionally split into several
//! print runs.

use crate::constants::PAGES_PER_FACE;
use crate::types::{FormatError, PageIndex};
use std::fmt;

/// Groups of absolute page numbers, one group per print run
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormattedBatch {
    groups: Vec<Vec<usize>>,
}

impl FormattedBatch {
    pub fn groups(&self) -> &[Vec<usize>] {
        &self.groups
    }

    pub fn into_groups(self) -> Vec<Vec<usize>> {
        self.groups
    }

    /// All page numbers in order, ignoring group boundaries
    pub fn pages(&self) -> impl Iterator<Item = usize> + '_ {
        self.groups.iter().flatten().copied()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// One comma-separated line per group, groups separated by a blank line.
impl fmt::Display for FormattedBatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, group) in self.groups.iter().enumerate() {
            if i > 0 {
                f.write_str("\n\n")?;
            }
            for (j, page) in group.iter().enumerate() {
                if j > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{page}")?;
            }
        }
        Ok(())
    }
}

/// Format an imposed sequence for manual printing.
///
/// Blanks are dropped and `offset` (the range's `start - 1`) is added to
/// every page. A `chunk_size` of 0 keeps everything in one group, even when
/// that group is empty; otherwise groups hold exactly `chunk_size` entries,
/// the last one possibly fewer.
/// `chunk_size` counts entries, not sheets: see [`entries_for_sheets`].
pub fn format_batch(sequence: &[PageIndex], offset: usize, chunk_size: usize) -> FormattedBatch {
    let adjusted: Vec<usize> = sequence
        .iter()
        .filter_map(|page| page.page())
        .map(|page| page + offset)
        .collect();

    let groups = if chunk_size == 0 {
        vec![adjusted]
    } else {
        adjusted.chunks(chunk_size).map(<[usize]>::to_vec).collect()
    };

    FormattedBatch { groups }
}

/// Entries contributed to one face by `sheets` physical sheets.
/// Saturates at `usize::MAX`.
pub fn entries_for_sheets(sheets: usize) -> usize {
    sheets.saturating_mul(PAGES_PER_FACE)
}

/// Parse a chunk size typed by the user.
///
/// Zero and negative values map to 0, which [`format_batch`] reads as
/// "no chunking". Sheet counts typed by the user go through
/// [`BookletOptions::set_wrap_sheets`](crate::BookletOptions::set_wrap_sheets),
/// which rejects them instead.
pub fn parse_chunk_size(input: &str) -> Result<usize, FormatError> {
    let value: i64 = input
        .trim()
        .parse()
        .map_err(|_| FormatError::InvalidChunkSize {
            input: input.to_string(),
        })?;
    Ok(usize::try_from(value).unwrap_or(0))
}
