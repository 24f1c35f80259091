//! Folding footnote reference superscripts into the text they annotate.

use super::patterns::{Patterns, SUPERSCRIPT_END, SUPERSCRIPT_START};
use crate::model::Run;

/// Fold every base / superscript / continuation triple into one run.
///
/// The folded run carries the superscript between the two sentinel labels
/// and spans from the base's left edge to the continuation's right edge.
/// A folded run may itself be the base of the next triple.
pub fn fold_superscripts(runs: Vec<Run>, patterns: &Patterns) -> Vec<Run> {
    let mut folded: Vec<Run> = Vec::with_capacity(runs.len());
    let mut count = 0;

    for run in runs {
        folded.push(run);
        let n = folded.len();
        if n < 3 || !is_superscript(&folded[n - 3], &folded[n - 2], &folded[n - 1], patterns) {
            continue;
        }

        let (Some(continuation), Some(marker)) = (folded.pop(), folded.pop()) else {
            continue;
        };
        if let Some(base) = folded.last_mut() {
            let text = format!(
                "{}{}{}{}{}",
                base.text.trim(),
                SUPERSCRIPT_START,
                marker.text.trim(),
                SUPERSCRIPT_END,
                continuation.text.trim()
            );
            base.width = continuation.right() - base.left;
            base.set_text(text);
            count += 1;
        }
    }

    log::debug!("folded {} superscripts", count);
    folded
}

/// Geometry and text test for a footnote reference between two runs of
/// one line.
fn is_superscript(base: &Run, marker: &Run, continuation: &Run, patterns: &Patterns) -> bool {
    patterns.superscript_marker.is_match(marker.text.trim())
        && patterns
            .superscript_continuation
            .is_match(continuation.text.trim())
        && base.height == continuation.height
        && marker.height < base.height
        && base.top == continuation.top
        && marker.top <= base.top
}
