use crate::chunk::{entries_for_sheets, parse_chunk_size};
use crate::constants::PAGES_PER_FACE;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Booklet job configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BookletOptions {
    // Page range
    pub start: usize,
    /// Last page to include; `None` means the last page of the document
    pub end: Option<usize>,

    /// Sheets per print run when splitting printer page lists
    pub wrap_sheets: Option<usize>,
}

impl Default for BookletOptions {
    fn default() -> Self {
        Self {
            start: 1,
            end: None,
            wrap_sheets: None,
        }
    }
}

impl BookletOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| BookletError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| BookletError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.start == 0 {
            return Err(BookletError::Config(
                "Start page must be at least 1".to_string(),
            ));
        }

        if let Some(end) = self.end {
            if end < self.start {
                return Err(BookletError::Config(format!(
                    "End page {} is before start page {}",
                    end, self.start
                )));
            }
        }

        match self.wrap_sheets {
            Some(0) => {
                return Err(BookletError::Config(
                    "Sheets per print run must be a positive number".to_string(),
                ));
            }
            Some(sheets) if sheets > usize::MAX / PAGES_PER_FACE => {
                return Err(BookletError::Config(format!(
                    "Sheets per print run ({}) is too large",
                    sheets
                )));
            }
            _ => {}
        }

        Ok(())
    }

    /// Set the sheets per print run from user input.
    ///
    /// Zero and negative values are rejected, the same as in a config file.
    pub fn set_wrap_sheets(&mut self, input: &str) -> Result<()> {
        self.wrap_sheets = Some(parse_chunk_size(input)?);
        self.validate()
    }

    /// The requested range, with a missing end filled in from the document
    pub fn page_range(&self, document_length: usize) -> PageRange {
        PageRange::from_pages(self.start, self.end.unwrap_or(document_length))
    }

    /// Entries per printer page-number group; 0 disables splitting
    pub fn chunk_size(&self) -> usize {
        self.wrap_sheets.map(entries_for_sheets).unwrap_or(0)
    }
}
