//! Error types for statext library.

use std::fmt;
use std::io;
use thiserror::Error;

/// Result type alias for statext operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Where an offending run sits in the source PDF.
///
/// `top` is page-relative, so a human can find the spot by opening the
/// page in a viewer at the renderer's zoom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunLocation {
    /// Page number (1-indexed)
    pub page: u32,
    /// Offset from the top of the page
    pub top: i64,
    /// Offset from the left edge of the page
    pub left: i64,
    /// Text content of the run
    pub text: String,
}

impl fmt::Display for RunLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "page {}, top {}, left {}: \"{}\"",
            self.page, self.top, self.left, self.text
        )
    }
}

/// Error types that can occur while normalizing a statute.
///
/// Every layout variant is fatal: the input does not follow the one
/// supported rendering convention and partial output would be misleading.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The renderer output is not well-formed XML.
    #[error("XML parsing error: {0}")]
    Xml(#[from] roxmltree::Error),

    /// A JSON run stream could not be read or written.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A classification pattern failed to compile.
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// An element of the renderer output lacks a required attribute.
    #[error("Missing attribute '{attribute}' on <{element}> (page {page})")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
        page: u32,
    },

    /// An attribute is present but not an integer.
    #[error("Invalid value '{value}' for attribute '{attribute}' on <{element}> (page {page})")]
    InvalidAttribute {
        element: &'static str,
        attribute: &'static str,
        value: String,
        page: u32,
    },

    /// No indentation profile of the catalog matches the document.
    #[error("Unrecognized layout: no indentation profile starts at left offset {left} ({location})")]
    UnknownIndentProfile { left: i64, location: RunLocation },

    /// A formula was opened but its explanation never followed.
    #[error("Formula started but never explained ({0})")]
    UnterminatedFormula(RunLocation),

    /// A run inside an amendment section is not styled as the section requires.
    #[error("Expected {expected} while inside {section} section ({location})")]
    UnexpectedStyle {
        expected: &'static str,
        section: &'static str,
        location: RunLocation,
    },

    /// Runs are out of reading order or overlap each other.
    #[error("Unsupported page layout, {reason} ({location})")]
    NonMonotonicLayout {
        reason: &'static str,
        location: RunLocation,
    },

    /// Line assembly left a run without a line or two runs on one line.
    #[error("Line numbering is not strictly increasing ({0})")]
    LineNumbering(RunLocation),

    /// A dash line sits deeper than any supported tiret level.
    #[error("Indentation level {level} is not supported for dashed lines ({location})")]
    UnsupportedIndentLevel { level: usize, location: RunLocation },

    /// Error while producing output.
    #[error("Rendering error: {0}")]
    Render(String),
}
