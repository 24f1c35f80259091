//! Breaking a top-level unit heading from a first sub-unit on its line.

use std::borrow::Cow;

use super::patterns::Patterns;
use crate::model::Run;

/// Put a line break between a level-0 heading and a level-1 heading that
/// starts on the same line ("Art. 5. 1. Tekst" becomes "Art. 5.\n1. Tekst").
///
/// Every later sub-unit starts on a line of its own; this makes the first
/// one do the same.
pub fn split_unit_boundaries(lines: &mut [Run], patterns: &Patterns) {
    let mut split = 0;
    for line in lines.iter_mut() {
        if let Cow::Owned(text) = patterns.unit_boundary.replace(&line.text, "${1}\n${2}") {
            line.set_text(text);
            split += 1;
        }
    }
    log::debug!("split {} unit headings from their first sub-unit", split);
}
