//! Readers turning renderer output into documents.

mod xml;

pub use xml::XmlParser;
