//! Line assembly: group runs into logical lines and merge each line into
//! one run.

use crate::error::{Error, Result};
use crate::model::Run;

/// Number, merge and verify lines. Returns exactly one run per line.
pub fn assemble_lines(mut runs: Vec<Run>, tolerance: i64) -> Result<Vec<Run>> {
    number_lines(&mut runs, tolerance)?;
    let lines = merge_lines(runs);
    check_numbering(&lines)?;
    log::debug!("assembled {} lines", lines.len());
    Ok(lines)
}

/// Assign line numbers in document order.
///
/// A run more than `tolerance` below the last seen top starts a new line.
/// A run within `tolerance` joins the current line and must start right of
/// its predecessor's right edge. A run above the current line is out of
/// reading order.
pub fn number_lines(runs: &mut [Run], tolerance: i64) -> Result<()> {
    let mut line_number = 0;
    let mut previous: Option<(i64, i64)> = None;

    for run in runs.iter_mut() {
        if let Some((top, right)) = previous {
            let drop = run.top - top;
            if drop > tolerance {
                line_number += 1;
            } else if drop >= -tolerance {
                if run.left <= right {
                    return Err(Error::NonMonotonicLayout {
                        reason: "run overlaps or precedes the previous run on its line",
                        location: run.location(),
                    });
                }
            } else {
                return Err(Error::NonMonotonicLayout {
                    reason: "run sits above the line before it",
                    location: run.location(),
                });
            }
        }
        run.line_number = Some(line_number);
        previous = Some((run.top, run.right()));
    }
    Ok(())
}

/// Concatenate the runs of each line, one space between trimmed texts.
pub fn merge_lines(runs: Vec<Run>) -> Vec<Run> {
    let mut lines: Vec<Run> = Vec::with_capacity(runs.len());
    for run in runs {
        if let Some(last) = lines.last_mut() {
            if last.line_number == run.line_number && run.left > last.right() {
                let text = format!("{} {}", last.text.trim(), run.text.trim());
                last.set_text(text);
                last.width += run.width;
                continue;
            }
        }
        lines.push(run);
    }
    lines
}

/// Every run is numbered and numbers strictly increase.
fn check_numbering(lines: &[Run]) -> Result<()> {
    let mut previous = None;
    for line in lines {
        match line.line_number {
            Some(number) if previous.map_or(true, |p| number > p) => previous = Some(number),
            _ => return Err(Error::LineNumbering(line.location())),
        }
    }
    Ok(())
}
