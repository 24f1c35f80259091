//! # statext
//!
//! Layout normalization for Polish statutes rendered from ISAP PDFs.
//!
//! The renderer (`pdftohtml -xml`) emits positioned text runs. This library
//! turns them into plain text with one structural unit (chapter, article,
//! paragraph, point, letter, tiret) per line, ready for a structured
//! document parser.
//!
//! ## Quick Start
//!
//! ```no_run
//! use statext::normalize_file;
//!
//! fn main() -> statext::Result<()> {
//!     // pdftohtml -zoom 1.35 -xml -stdout ustawa.pdf > ustawa.xml
//!     let text = normalize_file("ustawa.xml")?;
//!     println!("{}", text);
//!     Ok(())
//! }
//! ```
//!
//! ## What gets normalized
//!
//! - **Noise**: headers, footers, margin notes, footnote bodies, formulas
//! - **Amendment markers**: `[`outgoing`]` and `<`upcoming`>` decorations
//! - **Geometry**: baseline jitter, footnote reference superscripts
//! - **Lines**: fragments merged into lines, dash continuations rejoined
//! - **Text**: hyphenation joined, prose reflowed, structure kept per line

pub mod error;
pub mod layout;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result, RunLocation};
pub use layout::{IndentProfile, LayoutOptions, Normalizer, SUPERSCRIPT_END, SUPERSCRIPT_START};
pub use model::{Document, Page, Run, Span};
pub use parser::XmlParser;
pub use render::JsonFormat;

use std::io::Read;
use std::path::Path;

/// Parse renderer XML held in memory.
///
/// # Example
///
/// ```no_run
/// use statext::parse_xml;
///
/// let xml = std::fs::read_to_string("ustawa.xml").unwrap();
/// let doc = parse_xml(&xml).unwrap();
/// println!("Pages: {}", doc.page_count());
/// ```
pub fn parse_xml(xml: &str) -> Result<Document> {
    XmlParser::new(xml).parse()
}

/// Parse a renderer XML file.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    XmlParser::open(path)?.parse()
}

/// Parse renderer XML from a reader.
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    XmlParser::from_reader(reader)?.parse()
}

/// Normalize a parsed document with default options.
pub fn normalize_document(document: &Document) -> Result<String> {
    Normalizer::new(LayoutOptions::default())?.normalize(document)
}

/// Normalize renderer XML with default options.
///
/// # Example
///
/// ```
/// let xml = r#"<pdf2xml><page number="1">
///   <fontspec id="0" size="18"/>
///   <text top="100" left="96" width="300" height="18" font="0">Art. 1. All your base</text>
///   <text top="120" left="96" width="300" height="18" font="0">are belong to us.</text>
/// </page></pdf2xml>"#;
///
/// let text = statext::normalize_xml(xml)?;
/// assert_eq!(text, "Art. 1. All your base are belong to us.\n");
/// # Ok::<(), statext::Error>(())
/// ```
pub fn normalize_xml(xml: &str) -> Result<String> {
    normalize_document(&parse_xml(xml)?)
}

/// Normalize renderer XML with custom options.
///
/// # Example
///
/// ```no_run
/// use statext::{normalize_xml_with_options, LayoutOptions};
///
/// let options = LayoutOptions::new()
///     .with_footer_start(1100)
///     .with_indent_markers(true);
/// let xml = std::fs::read_to_string("ustawa.xml").unwrap();
/// let text = normalize_xml_with_options(&xml, options).unwrap();
/// ```
pub fn normalize_xml_with_options(xml: &str, options: LayoutOptions) -> Result<String> {
    Normalizer::new(options)?.normalize(&parse_xml(xml)?)
}

/// Normalize a renderer XML file with default options.
pub fn normalize_file<P: AsRef<Path>>(path: P) -> Result<String> {
    normalize_document(&parse_file(path)?)
}

/// Normalize a renderer XML file with custom options.
pub fn normalize_file_with_options<P: AsRef<Path>>(
    path: P,
    options: LayoutOptions,
) -> Result<String> {
    Normalizer::new(options)?.normalize(&parse_file(path)?)
}

/// Assemble the lines of a renderer XML file and dump them as JSON.
///
/// Useful for inspecting line numbers and indentation levels when a
/// document normalizes unexpectedly.
pub fn lines_to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let document = parse_file(path)?;
    let lines = Normalizer::new(LayoutOptions::default())?.assemble_lines(&document)?;
    render::to_json(&lines, format)
}
