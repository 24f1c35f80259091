//! Dash line joining.
//!
//! A line starting with "– " is either a tiret (a dash-led list item) or
//! the continuation of a sentence that happened to wrap right before a
//! dash. Continuations get their dash moved to the end of the line above.

use super::patterns::{indent_marker, Patterns, DASH};
use crate::error::{Error, Result};
use crate::model::Run;

/// Mark indented lines, join dash continuations, and unmark every line
/// that does not start a tiret.
///
/// Expects one run per line, classified by indentation.
pub fn join_dash_lines(lines: &mut [Run], patterns: &Patterns) -> Result<()> {
    for line in lines.iter_mut() {
        if let Some(level) = line.indent_level {
            let text = format!("{}{}", indent_marker(level), line.text);
            line.set_text(text);
        }
    }

    let mut joined = 0;
    for i in 1..lines.len() {
        let (before, after) = lines.split_at_mut(i);
        let previous = &mut before[i - 1];
        let current = &mut after[0];
        if !should_join(current, previous, patterns)? {
            continue;
        }

        let previous_text = format!("{} {}", previous.text.trim_end(), DASH);
        previous.set_text(previous_text);
        let current_text = current.text.replacen(&format!("@@{} ", DASH), "@@", 1);
        current.set_text(current_text);
        joined += 1;
    }

    for line in lines.iter_mut() {
        if !patterns.dash_line.is_match(&line.text) {
            let text = patterns.indent_marker.replace(&line.text, "").into_owned();
            line.set_text(text);
        }
    }

    log::debug!("moved {} dashes to the previous line", joined);
    Ok(())
}

/// Whether `current` continues `previous` rather than starting a tiret.
fn should_join(current: &Run, previous: &Run, patterns: &Patterns) -> Result<bool> {
    if !patterns.dash_line.is_match(&current.text) {
        return Ok(false);
    }
    let Some(level) = current.indent_level else {
        return Ok(false);
    };

    let previous_level = previous.indent_level;
    let previous_text = previous.text.as_str();
    let join = match level {
        0 => match previous_level {
            Some(0) => !patterns.point_line.is_match(previous_text),
            Some(1) => patterns.level0_line.is_match(previous_text),
            _ => false,
        },
        1 => {
            previous_level.is_some_and(|l| l < 2) && !patterns.letter_line.is_match(previous_text)
        }
        2 => {
            let explains = previous_text.trim_end().ends_with(':');
            let tiret_above = previous_level == Some(2) && patterns.dash_line.is_match(previous_text);
            !(explains || previous_level == Some(3) || tiret_above)
        }
        3 => !patterns.double_tiret_line.is_match(&current.text),
        4 => !patterns.triple_tiret_line.is_match(&current.text),
        _ => {
            return Err(Error::UnsupportedIndentLevel {
                level,
                location: current.location(),
            })
        }
    };
    Ok(join)
}
