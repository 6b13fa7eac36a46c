//! PDF side of booklet preparation
//!
//! This module connects the page-ordering core to real documents:
//! 1. Load the source and validate the requested range against it
//! 2. Impose the range
//! 3. Copy pages (and synthesize blanks) into a front and a back document
//! 4. Save both documents side by side

mod copy;
mod io;
mod materialize;

pub use io::{load_pdf, page_count, save_pdf};
pub use materialize::{materialize, materialize_face};

use crate::imposition::impose;
use crate::options::BookletOptions;
use crate::range::validate;
use crate::types::*;
use std::path::{Path, PathBuf};

/// Paths and range of a prepared booklet
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedBooklet {
    pub front_path: PathBuf,
    pub back_path: PathBuf,
    pub range: ValidatedRange,
}

/// Prepare the two booklet PDFs for `input` inside `output_dir`.
///
/// The front faces are written to `<stem>_front.pdf` and the back faces to
/// `<stem>_back.pdf`. Print the front file, turn the stack over, then print
/// the back file.
pub async fn prepare_booklet(
    input: impl AsRef<Path>,
    options: &BookletOptions,
    output_dir: impl AsRef<Path>,
) -> Result<PreparedBooklet> {
    options.validate()?;
    let input = input.as_ref();

    let source = load_pdf(input).await?;
    let total_pages = page_count(&source);
    if total_pages == 0 {
        return Err(BookletError::NoPages);
    }

    let range = validate(
        options.page_range(total_pages),
        Some(total_pages),
        ValidationPolicy::Lenient,
    )?;
    if let Some(advisory) = range.advisory() {
        log::warn!("{advisory}");
    }

    let plan = impose(range.page_count());
    let (front, back) =
        tokio::task::spawn_blocking(move || materialize(&source, &range, &plan)).await??;

    let (front_path, back_path) = output_paths(input, output_dir.as_ref());
    save_pdf(front, &front_path).await?;
    save_pdf(back, &back_path).await?;

    log::info!(
        "prepared pages {}..={} as {} and {}",
        range.start,
        range.end,
        front_path.display(),
        back_path.display()
    );

    Ok(PreparedBooklet {
        front_path,
        back_path,
        range,
    })
}

fn output_paths(input: &Path, output_dir: &Path) -> (PathBuf, PathBuf) {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "booklet".to_string());
    (
        output_dir.join(format!("{stem}_front.pdf")),
        output_dir.join(format!("{stem}_back.pdf")),
    )
}
