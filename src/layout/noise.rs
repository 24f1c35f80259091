//! Noise removal: everything on the page that is not statute body text.

use super::options::LayoutOptions;
use super::patterns::Patterns;
use super::stats::Histogram;
use crate::error::{Error, Result};
use crate::model::Run;

/// Drop runs whose text is empty or whitespace only.
pub fn drop_blank(runs: &mut Vec<Run>) {
    let before = runs.len();
    runs.retain(|run| !run.is_blank());
    log::debug!("dropped {} blank runs", before - runs.len());
}

/// Drop runs in the header band, the footer band, or the right margin.
///
/// Bands are page-relative, so the page encoding of `top` is undone first.
/// The right margin carries notes about provisions entering or leaving
/// force.
pub fn drop_margins(runs: &mut Vec<Run>, options: &LayoutOptions) {
    let before = runs.len();
    runs.retain(|run| {
        let top = run.page_top();
        top > options.header_end_offset
            && top <= options.footer_start_offset
            && run.left <= options.right_margin_start_offset
    });
    log::debug!("dropped {} header, footer and margin runs", before - runs.len());
}

/// The most common resolved font size. Runs without a resolved size never
/// count towards it.
pub fn majority_font_size(runs: &[Run]) -> Option<u32> {
    runs.iter()
        .filter_map(|run| run.font_size)
        .collect::<Histogram<_>>()
        .mode()
}

/// Drop every run not set in the majority font size.
///
/// Footnote bodies, captions and similar matter render visibly smaller (or
/// larger) than the statute itself.
pub fn drop_minority_fonts(runs: &mut Vec<Run>) {
    let majority = majority_font_size(runs);
    let before = runs.len();
    runs.retain(|run| majority.is_some() && run.font_size == majority);
    log::debug!(
        "dropped {} runs outside majority font size {:?}",
        before - runs.len(),
        majority
    );
}

/// Drop the runs of every formula.
///
/// A formula opens after a run ending with an introducing phrase ("według
/// wzoru:"), possibly split over that run and the one before it, and closes
/// at a run starting with the phrase explaining its symbols. The
/// introducing and explaining runs stay, everything between them goes.
///
/// A formula still open at the end of the document is fatal.
pub fn drop_formulas(runs: Vec<Run>, patterns: &Patterns) -> Result<Vec<Run>> {
    let mut kept: Vec<Run> = Vec::with_capacity(runs.len());
    let mut opened_at = None;
    let mut dropped = 0;

    for run in runs {
        if opened_at.is_some() {
            if patterns.formula_end.is_match(run.text.trim_start()) {
                opened_at = None;
                kept.push(run);
            } else {
                dropped += 1;
            }
            continue;
        }

        if opens_formula(kept.last(), &run, patterns) {
            opened_at = Some(run.location());
        }
        kept.push(run);
    }

    if let Some(location) = opened_at {
        return Err(Error::UnterminatedFormula(location));
    }
    log::debug!("dropped {} formula runs", dropped);
    Ok(kept)
}

fn opens_formula(previous: Option<&Run>, run: &Run, patterns: &Patterns) -> bool {
    let text = run.text.trim_end();
    if patterns.formula_start.is_match(text) {
        return true;
    }
    previous.is_some_and(|previous| {
        let joined = format!("{} {}", previous.text.trim_end(), text.trim_start());
        patterns.formula_start.is_match(&joined)
    })
}
