pub mod chunk;
mod constants;
pub mod document;
pub mod imposition;
mod options;
pub mod range;
mod stats;
mod types;

pub use chunk::{FormattedBatch, entries_for_sheets, format_batch, parse_chunk_size};
pub use constants::{PAGES_PER_FACE, PAGES_PER_SHEET};
pub use document::{
    PreparedBooklet, load_pdf, materialize, materialize_face, page_count, prepare_booklet,
    save_pdf,
};
pub use imposition::{impose, padded_page_count};
pub use options::*;
pub use range::{padding_for, validate, validate_input};
pub use stats::calculate_statistics;
pub use types::*;
