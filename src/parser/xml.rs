//! Reader for the renderer's XML output (`pdftohtml -xml`).

use std::fs;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use roxmltree::Node;
use unicode_normalization::UnicodeNormalization;

use crate::error::{Error, Result};
use crate::model::{Document, Page, Run, Span};

/// pdftohtml XML parser.
///
/// Reads `<page>` elements with their `<fontspec>` declarations and
/// `<text>` runs. Inline `<b>` and `<i>` become styled spans; other inline
/// elements are transparent. Text is NFC-normalized.
pub struct XmlParser {
    xml: String,
}

impl XmlParser {
    /// Parse XML held in memory.
    pub fn new(xml: impl Into<String>) -> Self {
        Self { xml: xml.into() }
    }

    /// Read an XML file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(fs::read_to_string(path)?))
    }

    /// Read XML from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut xml = String::new();
        reader.read_to_string(&mut xml)?;
        Ok(Self::new(xml))
    }

    /// Parse into a document.
    ///
    /// Fails on malformed XML, and on a missing or non-integer positional
    /// attribute anywhere in the document.
    pub fn parse(&self) -> Result<Document> {
        let options = roxmltree::ParsingOptions {
            allow_dtd: true,
            ..roxmltree::ParsingOptions::default()
        };
        let xml = roxmltree::Document::parse_with_options(&self.xml, options)?;

        let mut document = Document::new();
        for page_node in xml.descendants().filter(|n| n.has_tag_name("page")) {
            document.add_page(parse_page(page_node)?);
        }

        log::debug!(
            "read {} pages with {} runs",
            document.page_count(),
            document.run_count()
        );
        Ok(document)
    }
}

fn parse_page(node: Node) -> Result<Page> {
    let number: u32 = required(node, "page", "number", 0)?;
    let mut page = Page::new(number);
    if let (Some(width), Some(height)) = (
        optional(node, "page", "width", number)?,
        optional(node, "page", "height", number)?,
    ) {
        page = page.with_size(width, height);
    }

    for child in node.descendants().filter(Node::is_element) {
        match child.tag_name().name() {
            "fontspec" => {
                let id = text_attr(child, "fontspec", "id", number)?;
                let size = required(child, "fontspec", "size", number)?;
                page.add_font(id, size);
            }
            "text" => page.add_run(parse_run(child, number)?),
            _ => {}
        }
    }
    Ok(page)
}

fn parse_run(node: Node, page: u32) -> Result<Run> {
    let top = required(node, "text", "top", page)?;
    let left = required(node, "text", "left", page)?;
    let width = required(node, "text", "width", page)?;
    let height = required(node, "text", "height", page)?;
    let font = text_attr(node, "text", "font", page)?;

    let mut spans = Vec::new();
    collect_spans(node, false, false, &mut spans);
    Ok(Run::styled(spans, top, left, width, height).with_font(font))
}

/// Flatten inline markup into spans, inheriting bold and italic.
fn collect_spans(node: Node, bold: bool, italic: bool, spans: &mut Vec<Span>) {
    for child in node.children() {
        if let Some(text) = child.text().filter(|_| child.is_text()) {
            spans.push(Span {
                text: text.nfc().collect(),
                bold,
                italic,
            });
        } else if child.is_element() {
            let name = child.tag_name().name();
            collect_spans(child, bold || name == "b", italic || name == "i", spans);
        }
    }
}

fn text_attr<'a>(
    node: Node<'a, '_>,
    element: &'static str,
    attribute: &'static str,
    page: u32,
) -> Result<&'a str> {
    node.attribute(attribute).ok_or(Error::MissingAttribute {
        element,
        attribute,
        page,
    })
}

fn required<T: FromStr>(
    node: Node,
    element: &'static str,
    attribute: &'static str,
    page: u32,
) -> Result<T> {
    let value = text_attr(node, element, attribute, page)?;
    parse_value(value, element, attribute, page)
}

fn optional<T: FromStr>(
    node: Node,
    element: &'static str,
    attribute: &'static str,
    page: u32,
) -> Result<Option<T>> {
    node.attribute(attribute)
        .map(|value| parse_value(value, element, attribute, page))
        .transpose()
}

fn parse_value<T: FromStr>(
    value: &str,
    element: &'static str,
    attribute: &'static str,
    page: u32,
) -> Result<T> {
    value.trim().parse().map_err(|_| Error::InvalidAttribute {
        element,
        attribute,
        value: value.to_string(),
        page,
    })
}
