//! Page-level types.

use super::Run;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single rendered page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Page {
    /// Page number (1-indexed)
    pub number: u32,

    /// Page width in renderer units
    #[serde(default)]
    pub width: i64,

    /// Page height in renderer units
    #[serde(default)]
    pub height: i64,

    /// Font sizes declared on this page, keyed by renderer font id
    #[serde(default)]
    pub fonts: BTreeMap<String, u32>,

    /// Runs in rendering order
    pub runs: Vec<Run>,
}

impl Page {
    /// Create an empty page.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            ..Self::default()
        }
    }

    /// Set the page dimensions.
    pub fn with_size(mut self, width: i64, height: i64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Declare a font size.
    pub fn add_font(&mut self, id: impl Into<String>, size: u32) {
        self.fonts.insert(id.into(), size);
    }

    /// Add a run, stamping it with this page's number.
    pub fn add_run(&mut self, mut run: Run) {
        run.page_number = self.number;
        self.runs.push(run);
    }

    /// Check if the page holds no runs.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}
