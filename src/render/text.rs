//! Plain text rendering for normalized statute lines.

use crate::layout::Patterns;
use crate::model::Run;

/// Linearize lines into the final text.
///
/// Each line is trimmed. Words hyphenated across a line break are fused,
/// then every line break collapses to a space unless the next line starts
/// a structural unit (book, title, division, chapter, unit, point, letter
/// or tiret). Indent markers are consumed unless `keep_indent_markers`.
/// Non-empty output ends with a newline.
pub fn to_text(lines: &[Run], patterns: &Patterns, keep_indent_markers: bool) -> String {
    if lines.is_empty() {
        return String::new();
    }

    let joined = lines
        .iter()
        .map(|line| line.text.trim())
        .collect::<Vec<_>>()
        .join("\n");
    let joined = patterns.hyphenation.replace_all(&joined, "${1}${2}");

    let mut output = String::with_capacity(joined.len() + 1);
    for (i, line) in joined.split('\n').enumerate() {
        if i > 0 {
            let keep_break = patterns.structural_prefix.is_match(line);
            output.push(if keep_break { '\n' } else { ' ' });
        }
        if keep_indent_markers {
            output.push_str(line);
        } else {
            output.push_str(&patterns.indent_marker.replace(line, ""));
        }
    }
    output.push('\n');
    output
}
