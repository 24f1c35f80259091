//! Layout options and configuration.

use super::indent::IndentProfile;

/// Options for normalizing a rendered statute.
///
/// Offsets are in renderer units at the renderer's 1.35 zoom.
#[derive(Debug, Clone)]
pub struct LayoutOptions {
    /// How far from the top of a page the header ends
    pub header_end_offset: i64,

    /// How far from the top of a page the footer starts
    pub footer_start_offset: i64,

    /// Left offset from which runs are margin annotations
    pub right_margin_start_offset: i64,

    /// Vertical distance within which runs share a line
    pub line_tolerance: i64,

    /// Horizontal distance within which a left offset matches an indent level
    pub indent_tolerance: i64,

    /// Known indentation layouts, one of which every document must use
    pub indent_catalog: Vec<IndentProfile>,

    /// Keep `@@INDENT<n>@@` markers on tiret lines in the output
    pub keep_indent_markers: bool,
}

impl LayoutOptions {
    /// Create new layout options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set where the page header ends.
    pub fn with_header_end(mut self, offset: i64) -> Self {
        self.header_end_offset = offset;
        self
    }

    /// Set where the page footer starts.
    pub fn with_footer_start(mut self, offset: i64) -> Self {
        self.footer_start_offset = offset;
        self
    }

    /// Set where the right margin starts.
    pub fn with_right_margin(mut self, offset: i64) -> Self {
        self.right_margin_start_offset = offset;
        self
    }

    /// Set the same-line tolerance.
    pub fn with_line_tolerance(mut self, tolerance: i64) -> Self {
        self.line_tolerance = tolerance;
        self
    }

    /// Set the indent level tolerance.
    pub fn with_indent_tolerance(mut self, tolerance: i64) -> Self {
        self.indent_tolerance = tolerance;
        self
    }

    /// Replace the indentation catalog.
    pub fn with_indent_catalog(mut self, catalog: Vec<IndentProfile>) -> Self {
        self.indent_catalog = catalog;
        self
    }

    /// Keep or consume the indent markers of tiret lines.
    pub fn with_indent_markers(mut self, keep: bool) -> Self {
        self.keep_indent_markers = keep;
        self
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            header_end_offset: 50,
            footer_start_offset: 1060,
            right_margin_start_offset: 720,
            line_tolerance: 2,
            indent_tolerance: 13,
            indent_catalog: IndentProfile::catalog(),
            keep_indent_markers: false,
        }
    }
}
