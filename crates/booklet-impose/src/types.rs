use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookletError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("No pages to impose")]
    NoPages,
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Format(#[from] FormatError),
}

pub type Result<T> = std::result::Result<T, BookletError>;

/// Errors produced while checking a requested page range.
///
/// These are the only user-facing errors of the page-ordering core. They are
/// terminal for the request: the caller re-prompts instead of continuing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Start and end pages must be whole numbers (got {input:?})")]
    NonIntegerInput { input: String },
    #[error(
        "Invalid page range {start}..{end}: pages must be positive and start must not exceed end"
    )]
    InvalidOrder { start: i64, end: i64 },
    #[error("End page {end} is beyond the last page of the document ({document_length})")]
    OutOfBounds { end: usize, document_length: usize },
    #[error(
        "Page count ({page_count}) is not divisible by 4; a booklet needs {padding_needed} blank page(s). \
         Change the end page to {suggested_end} (or choose a count divisible by 4)"
    )]
    UnalignedRange {
        page_count: usize,
        padding_needed: usize,
        suggested_end: usize,
    },
}

/// Errors produced at the chunk-size input boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Pages per print run must be a whole number (got {input:?})")]
    InvalidChunkSize { input: String },
}

/// A requested page interval, exactly as the caller supplied it.
///
/// Values are signed so that zero and negative input survive until
/// validation rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    pub start: i64,
    pub end: i64,
}

/// How an interval whose length is not a multiple of 4 is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationPolicy {
    /// A document is being processed and can be padded with blank pages.
    /// Misalignment is reported as an advisory.
    #[default]
    Lenient,
    /// Only printer page numbers are computed; there is nothing to pad.
    /// Misalignment is an error carrying the corrected end page.
    Strict,
}

/// A page interval that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedRange {
    pub start: usize,
    pub end: usize,
    /// Blank pages required to reach a multiple of 4
    pub padding_needed: usize,
}

/// Non-fatal notice that blank pages will be appended to a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddingAdvisory {
    pub page_count: usize,
    pub padding_needed: usize,
    pub padded_count: usize,
}

impl fmt::Display for PaddingAdvisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Page count ({}) is not divisible by 4. {} blank page(s) will be added for booklet output; the total becomes {}.",
            self.page_count, self.padding_needed, self.padded_count
        )
    }
}

/// A slot in an imposed sequence: a 1-based page number or a blank page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PageIndex {
    Page(usize),
    Blank,
}

impl fmt::Display for PageIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageIndex::Page(number) => write!(f, "{number}"),
            PageIndex::Blank => f.write_str("blank"),
        }
    }
}

/// Front-face and back-face page sequences for a saddle-stitched booklet.
///
/// Entry pairs `[2k, 2k + 1]` of each face belong to sheet `k`, counted from
/// the outermost sheet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImpositionPlan {
    pub front: Vec<PageIndex>,
    pub back: Vec<PageIndex>,
}

/// One physical sheet of an imposition plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sheet {
    /// 0 is the outermost sheet
    pub index: usize,
    /// Left and right page of the front face
    pub front: [PageIndex; 2],
    /// Left and right page of the back face
    pub back: [PageIndex; 2],
}

/// Statistics about a booklet
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BookletStatistics {
    /// Number of real pages in the booklet
    pub source_pages: usize,
    /// Page count after padding to a multiple of 4
    pub padded_pages: usize,
    /// Number of blank pages added for padding
    pub blank_pages_added: usize,
    /// Number of physical sheets
    pub sheets: usize,
    /// Entries on each face sequence (front and back are equal)
    pub pages_per_face: usize,
}
