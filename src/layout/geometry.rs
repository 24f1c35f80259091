//! Geometry normalization: document-global vertical order and baseline jitter.

use super::stats::Histogram;
use crate::model::Run;

/// Added to `top` once per page number; larger than any page is tall.
pub const PAGE_OFFSET_MULTIPLIER: i64 = 100_000;

/// Height deficits (below the majority height) treated as rendering jitter.
const JITTER_DELTAS: [i64; 2] = [2, 3];

/// Rewrite every `top` as `top + page_number * PAGE_OFFSET_MULTIPLIER`.
///
/// Afterwards runs order by page first, then by in-page top, and runs tied
/// on one page stay tied.
pub fn paginate(runs: &mut [Run]) {
    for run in runs.iter_mut() {
        run.top += i64::from(run.page_number) * PAGE_OFFSET_MULTIPLIER;
    }
}

/// Most common run height, the signature of body text.
pub fn majority_height(runs: &[Run]) -> Option<i64> {
    runs.iter().map(|r| r.height).collect::<Histogram<_>>().mode()
}

/// Snap runs that are 2 or 3 units shorter than the majority height back
/// onto the body baseline.
///
/// The renderer sometimes splits one line into fragments of slightly
/// smaller height sitting a little lower; growing them to the majority
/// height and raising them by the same amount puts them back on the line.
pub fn snap_jitter(runs: &mut [Run]) {
    let Some(majority) = majority_height(runs) else {
        return;
    };

    let mut snapped = 0;
    for run in runs.iter_mut() {
        let delta = majority - run.height;
        if JITTER_DELTAS.contains(&delta) {
            run.height = majority;
            run.top -= delta;
            snapped += 1;
        }
    }
    log::debug!("snapped {} runs to majority height {}", snapped, majority);
}
