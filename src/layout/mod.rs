//! Layout normalization: from positioned runs to ordered statute lines.

mod boundary;
mod geometry;
mod indent;
mod lines;
mod noise;
mod options;
mod patterns;
mod stats;
mod style;
mod superscript;
mod tiret;

pub use geometry::PAGE_OFFSET_MULTIPLIER;
pub use indent::IndentProfile;
pub use options::LayoutOptions;
pub use patterns::{indent_marker, Patterns, DASH, SUPERSCRIPT_END, SUPERSCRIPT_START};

use crate::error::Result;
use crate::model::{Document, Run};
use crate::render;

/// Normalizes a rendered statute into plain text, one structural unit per
/// line.
///
/// # Example
///
/// ```no_run
/// use statext::{Document, LayoutOptions, Normalizer};
///
/// let document = Document::from_json(&std::fs::read_to_string("runs.json")?)?;
/// let normalizer = Normalizer::new(LayoutOptions::default())?;
/// let text = normalizer.normalize(&document)?;
/// # Ok::<(), statext::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Normalizer {
    options: LayoutOptions,
    patterns: Patterns,
}

impl Normalizer {
    /// Create a normalizer, compiling its pattern table.
    pub fn new(options: LayoutOptions) -> Result<Self> {
        Ok(Self {
            options,
            patterns: Patterns::new()?,
        })
    }

    /// The layout options in effect.
    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// The compiled pattern table.
    pub fn patterns(&self) -> &Patterns {
        &self.patterns
    }

    /// Normalize a document to text.
    ///
    /// Returns an empty string when no body text survives filtering.
    pub fn normalize(&self, document: &Document) -> Result<String> {
        let lines = self.structure_lines(document)?;
        Ok(render::to_text(
            &lines,
            &self.patterns,
            self.options.keep_indent_markers,
        ))
    }

    /// Run every pass up to indentation classification.
    ///
    /// The result holds one run per logical line, each with its line number
    /// and indentation level.
    pub fn assemble_lines(&self, document: &Document) -> Result<Vec<Run>> {
        let mut runs = document.runs();
        let total = runs.len();

        geometry::paginate(&mut runs);
        noise::drop_blank(&mut runs);
        noise::drop_margins(&mut runs, &self.options);
        let body_size = noise::majority_font_size(&runs);
        style::unwrap_amendments(&mut runs, &self.patterns, body_size)?;
        geometry::snap_jitter(&mut runs);
        let mut runs = superscript::fold_superscripts(runs, &self.patterns);
        noise::drop_minority_fonts(&mut runs);
        let runs = noise::drop_formulas(runs, &self.patterns)?;
        log::debug!("{} of {} runs are body text", runs.len(), total);

        let mut lines = lines::assemble_lines(runs, self.options.line_tolerance)?;
        if let Some(profile) = indent::select_profile(&lines, &self.options.indent_catalog)? {
            indent::classify(&mut lines, profile, self.options.indent_tolerance);
        }
        Ok(lines)
    }

    /// Run every pass up to linearization: lines with dash continuations
    /// joined and unit headings split from their first sub-unit.
    pub fn structure_lines(&self, document: &Document) -> Result<Vec<Run>> {
        let mut lines = self.assemble_lines(document)?;
        tiret::join_dash_lines(&mut lines, &self.patterns)?;
        boundary::split_unit_boundaries(&mut lines, &self.patterns);
        log::info!(
            "normalized {} pages into {} lines",
            document.page_count(),
            lines.len()
        );
        Ok(lines)
    }
}
