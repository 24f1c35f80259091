//! Document-level types.

use super::{Page, Run};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A rendered document: ordered pages of runs.
///
/// Lives only for the duration of one conversion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// Pages in the document
    pub pages: Vec<Page>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a document previously written with [`Document::to_json`].
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the document as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Add a page to the document.
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Total number of runs over all pages.
    pub fn run_count(&self) -> usize {
        self.pages.iter().map(|p| p.runs.len()).sum()
    }

    /// Flatten all pages into one run sequence with resolved font sizes.
    ///
    /// A font id is looked up in its own page's table first. The renderer
    /// declares each font only once, on the page where it first appears, so
    /// ids missing there fall back to the first declaration anywhere in the
    /// document. Unknown ids resolve to `None`.
    pub fn runs(&self) -> Vec<Run> {
        let mut declared: HashMap<&str, u32> = HashMap::new();
        for page in &self.pages {
            for (id, size) in &page.fonts {
                declared.entry(id.as_str()).or_insert(*size);
            }
        }

        self.pages
            .iter()
            .flat_map(|page| {
                let declared = &declared;
                page.runs.iter().map(move |run| {
                    let mut run = run.clone();
                    run.page_number = page.number;
                    run.font_size = page
                        .fonts
                        .get(&run.font_id)
                        .or_else(|| declared.get(run.font_id.as_str()))
                        .copied();
                    run
                })
            })
            .collect()
    }
}
