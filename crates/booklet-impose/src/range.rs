//! Page range validation and padding calculation

use crate::constants::PAGES_PER_SHEET;
use crate::types::{PaddingAdvisory, PageRange, ValidatedRange, ValidationError, ValidationPolicy};

impl PageRange {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Build a range from unsigned page numbers. Values too large for `i64`
    /// saturate, which later fails the bounds check.
    pub fn from_pages(start: usize, end: usize) -> Self {
        Self {
            start: i64::try_from(start).unwrap_or(i64::MAX),
            end: i64::try_from(end).unwrap_or(i64::MAX),
        }
    }

    /// Parse a range from text fields. Surrounding whitespace is ignored.
    pub fn parse(start: &str, end: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            start: parse_page_number(start)?,
            end: parse_page_number(end)?,
        })
    }
}

fn parse_page_number(input: &str) -> Result<i64, ValidationError> {
    input
        .trim()
        .parse()
        .map_err(|_| ValidationError::NonIntegerInput {
            input: input.to_string(),
        })
}

impl ValidatedRange {
    /// Number of real pages in the range
    pub fn page_count(&self) -> usize {
        self.end - self.start + 1
    }

    /// Page count after padding to a multiple of 4
    pub fn padded_count(&self) -> usize {
        self.page_count() + self.padding_needed
    }

    /// Amount to add to a 1-based position inside the range to get the
    /// absolute document page number
    pub fn offset(&self) -> usize {
        self.start - 1
    }

    /// The padding notice for this range, if any padding is required
    pub fn advisory(&self) -> Option<PaddingAdvisory> {
        (self.padding_needed > 0).then(|| PaddingAdvisory {
            page_count: self.page_count(),
            padding_needed: self.padding_needed,
            padded_count: self.padded_count(),
        })
    }
}

/// Blank pages needed to bring `page_count` up to a multiple of 4
pub fn padding_for(page_count: usize) -> usize {
    (PAGES_PER_SHEET - page_count % PAGES_PER_SHEET) % PAGES_PER_SHEET
}

/// Validate a page range.
///
/// Checks run in order (ordering, document bounds, alignment) and the first
/// failure is returned. Under [`ValidationPolicy::Lenient`] a misaligned
/// range succeeds and carries its padding; under
/// [`ValidationPolicy::Strict`] it fails with
/// [`ValidationError::UnalignedRange`].
pub fn validate(
    range: PageRange,
    known_document_length: Option<usize>,
    policy: ValidationPolicy,
) -> Result<ValidatedRange, ValidationError> {
    let PageRange { start, end } = range;
    let invalid_order = || ValidationError::InvalidOrder { start, end };

    if start < 1 || end < 1 || start > end {
        return Err(invalid_order());
    }
    let start = usize::try_from(start).map_err(|_| invalid_order())?;
    let end = usize::try_from(end).map_err(|_| invalid_order())?;

    if let Some(document_length) = known_document_length {
        if end > document_length {
            return Err(ValidationError::OutOfBounds {
                end,
                document_length,
            });
        }
    }

    let page_count = end - start + 1;
    let padding_needed = padding_for(page_count);

    if padding_needed > 0 && policy == ValidationPolicy::Strict {
        return Err(ValidationError::UnalignedRange {
            page_count,
            padding_needed,
            suggested_end: end + padding_needed,
        });
    }

    log::debug!(
        "validated pages {start}..={end} ({page_count} pages, {padding_needed} padding)"
    );

    Ok(ValidatedRange {
        start,
        end,
        padding_needed,
    })
}

/// Parse and validate a range given as text
pub fn validate_input(
    start: &str,
    end: &str,
    known_document_length: Option<usize>,
    policy: ValidationPolicy,
) -> Result<ValidatedRange, ValidationError> {
    validate(PageRange::parse(start, end)?, known_document_length, policy)
}
