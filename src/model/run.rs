//! Positioned text fragments.

use serde::{Deserialize, Serialize};

use crate::error::RunLocation;
use crate::layout::PAGE_OFFSET_MULTIPLIER;

/// A piece of a run's text with uniform inline style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// The text content
    pub text: String,
    /// Rendered in a bold face
    #[serde(default)]
    pub bold: bool,
    /// Rendered in an italic face
    #[serde(default)]
    pub italic: bool,
}

impl Span {
    /// Create an undecorated span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italic: false,
        }
    }

    /// Create a bold span.
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
            italic: false,
        }
    }

    /// Create an italic span.
    pub fn italic(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italic: true,
        }
    }

    /// Whether the span holds nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// One positioned fragment of rendered text ("glyph run").
///
/// Coordinates are in renderer units. `top` starts out page-relative and is
/// rewritten to a document-global value by the geometry pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    /// The text content
    pub text: String,
    /// Inline style segments as rendered; emptied once amendment
    /// decoration has been resolved
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub spans: Vec<Span>,
    /// Page number (1-indexed)
    #[serde(default)]
    pub page_number: u32,
    /// Vertical offset from the top of the page
    pub top: i64,
    /// Horizontal offset from the left edge of the page
    pub left: i64,
    /// Glyph box width
    pub width: i64,
    /// Glyph box height
    pub height: i64,
    /// Renderer font identifier
    #[serde(default)]
    pub font_id: String,
    /// Font size resolved through the font table (`None` = no fontsize)
    #[serde(default)]
    pub font_size: Option<u32>,
    /// Logical line, assigned by line assembly
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_number: Option<u32>,
    /// Indentation level, assigned by indentation classification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indent_level: Option<usize>,
}

impl Run {
    /// Create an undecorated run.
    pub fn new(text: impl Into<String>, top: i64, left: i64, width: i64, height: i64) -> Self {
        let text = text.into();
        Self {
            spans: vec![Span::plain(text.clone())],
            text,
            page_number: 1,
            top,
            left,
            width,
            height,
            font_id: String::new(),
            font_size: None,
            line_number: None,
            indent_level: None,
        }
    }

    /// Create a run from styled spans; the text is their concatenation.
    pub fn styled(spans: Vec<Span>, top: i64, left: i64, width: i64, height: i64) -> Self {
        let mut run = Self::new(String::new(), top, left, width, height);
        run.text = spans.iter().map(|s| s.text.as_str()).collect();
        run.spans = spans;
        run
    }

    /// Set the font identifier.
    pub fn with_font(mut self, font_id: impl Into<String>) -> Self {
        self.font_id = font_id.into();
        self
    }

    /// Set the page number.
    pub fn on_page(mut self, page_number: u32) -> Self {
        self.page_number = page_number;
        self
    }

    /// Whether the run holds nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Right edge of the glyph box.
    pub fn right(&self) -> i64 {
        self.left + self.width
    }

    /// `top` with the page encoding undone.
    pub fn page_top(&self) -> i64 {
        self.top.rem_euclid(PAGE_OFFSET_MULTIPLIER)
    }

    /// Replace the text and drop the inline style segments.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.spans.clear();
    }

    /// Position of the run for error reports.
    pub fn location(&self) -> RunLocation {
        RunLocation {
            page: self.page_number,
            top: self.page_top(),
            left: self.left,
            text: self.text.clone(),
        }
    }
}
