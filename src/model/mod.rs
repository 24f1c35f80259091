//! Document model types for the renderer's run stream.
//!
//! A `Document` is an ordered list of `Page`s, each holding the positioned
//! `Run`s the renderer emitted plus the page's font table. The layout passes
//! work on a flat, owned `Vec<Run>` taken out of the document.

mod document;
mod page;
mod run;

pub use document::Document;
pub use page::Page;
pub use run::{Run, Span};
