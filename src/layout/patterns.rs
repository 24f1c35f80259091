//! Compiled classification patterns, keyed by the role they play.
//!
//! Heading patterns follow Polish legislative numbering: "Art." units in
//! statutes, "§" units in ordinances, numbered paragraphs below them, then
//! points "1)", letters "a)" and dash-led tirets "– ".

use regex::Regex;

use crate::error::Result;

/// Label placed in the text before a folded superscript.
pub const SUPERSCRIPT_START: &str = "@@SUPERSCRIPT@@";

/// Label placed in the text after a folded superscript.
pub const SUPERSCRIPT_END: &str = "##SUPERSCRIPT##";

/// Dash used by the producer for tirets.
pub const DASH: char = '–';

/// Optional folded superscript inside a heading number, e.g. "Art. 5@@SUPERSCRIPT@@1##SUPERSCRIPT##.".
const SUPERSCRIPT: &str = r"(?:@@SUPERSCRIPT@@[^#]+##SUPERSCRIPT##)?";

const INDENT: &str = r"^@@INDENT\d+@@";

/// Marker prefixed to a line that starts at a known indentation level.
pub fn indent_marker(level: usize) -> String {
    format!("@@INDENT{}@@", level)
}

fn level0_heading() -> String {
    format!(r"(?:Art\.|§)\s+\d+[a-z]*{}\.", SUPERSCRIPT)
}

fn level1_heading() -> String {
    format!(r"(?:§\s+)?\d+[a-z]*{}\.", SUPERSCRIPT)
}

/// The pattern table shared by all passes of one normalizer.
#[derive(Debug, Clone)]
pub struct Patterns {
    /// Line starting with a level-0 unit heading ("Art. 5." / "§ 5.")
    pub level0_heading: Regex,
    /// Level-0 heading immediately followed by a level-1 heading
    pub unit_boundary: Regex,
    /// Indent marker at line start
    pub indent_marker: Regex,
    /// Indented level-0 heading
    pub level0_line: Regex,
    /// Indented point ("1) ")
    pub point_line: Regex,
    /// Indented letter ("a) ")
    pub letter_line: Regex,
    /// Indented dash ("– ")
    pub dash_line: Regex,
    /// Indented double tiret ("– – ")
    pub double_tiret_line: Regex,
    /// Indented triple tiret ("– – – ")
    pub triple_tiret_line: Regex,
    /// Text of a footnote reference superscript
    pub superscript_marker: Regex,
    /// Text continuing a line right after a superscript
    pub superscript_continuation: Regex,
    /// End of the sentence introducing a formula
    pub formula_start: Regex,
    /// Start of the sentence explaining a formula's symbols
    pub formula_end: Regex,
    /// Word hyphenated across a line break
    pub hyphenation: Regex,
    /// Line starts whose preceding line break is kept
    pub structural_prefix: Regex,
}

impl Patterns {
    /// Compile the pattern table.
    pub fn new() -> Result<Self> {
        Ok(Self {
            level0_heading: Regex::new(&format!("^{}", level0_heading()))?,
            unit_boundary: Regex::new(&format!(
                r"^({})\s+({})",
                level0_heading(),
                level1_heading()
            ))?,
            indent_marker: Regex::new(INDENT)?,
            level0_line: Regex::new(&format!("{}{}", INDENT, level0_heading()))?,
            point_line: Regex::new(&format!(r"{}\d+[a-z]*{}\) ", INDENT, SUPERSCRIPT))?,
            letter_line: Regex::new(&format!(r"{}[a-z]+{}\) ", INDENT, SUPERSCRIPT))?,
            dash_line: Regex::new(&format!("{}{} ", INDENT, DASH))?,
            double_tiret_line: Regex::new(&format!("{}{d} {d} ", INDENT, d = DASH))?,
            triple_tiret_line: Regex::new(&format!("{}{d} {d} {d} ", INDENT, d = DASH))?,
            superscript_marker: Regex::new(r"^[a-z0-9]+$")?,
            superscript_continuation: Regex::new(r"^\. ")?,
            formula_start: Regex::new(
                r"(?:(?:według|wg\.?)\s+wzoru|zgodnie\s+ze\s+wzorem)\s*:$",
            )?,
            formula_end: Regex::new(
                r"^(?:(?:gdzie|w\s+którym)(?:\s+poszczególne)?\s+symbole\s+oznaczają|gdzie\s*:)",
            )?,
            hyphenation: Regex::new(r"([a-ząćęłńśóźż])-\n([a-ząćęłńśóźż])")?,
            structural_prefix: Regex::new(concat!(
                r"^(?:",
                r"KSIĘGA\s+(?:PIERWSZA|DRUGA|TRZECIA|CZWARTA|PIĄTA|SZÓSTA|SIÓDMA|ÓSMA)|",
                r"TYTUŁ\s+[IVXLC]|",
                r"DZIAŁ\s+[IVXLC]|",
                r"Rozdział\s+[IVXLC1-9]|",
                r"Art\.|",
                r"§\s+\d+[a-z]*\.|",
                r"\d+[a-z]*\.|",
                r"\d+[a-z]*\)|",
                r"[a-z]+\)|",
                r"@@INDENT",
                r")"
            ))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns() -> Patterns {
        Patterns::new().unwrap()
    }

    #[test]
    fn test_level0_heading() {
        let p = patterns();
        assert!(p.level0_heading.is_match("Art. 123. Tekst"));
        assert!(p.level0_heading.is_match("§ 5a. Tekst"));
        assert!(p.level0_heading.is_match("Art. 5@@SUPERSCRIPT@@1##SUPERSCRIPT##. Tekst"));
        assert!(!p.level0_heading.is_match("1. Tekst"));
        assert!(!p.level0_heading.is_match("art. 5 ust. 2"));
    }

    #[test]
    fn test_unit_boundary_groups() {
        let p = patterns();
        let caps = p.unit_boundary.captures("Art.    123.     § 1.    Tekst").unwrap();
        assert_eq!(&caps[1], "Art.    123.");
        assert_eq!(&caps[2], "§ 1.");
        assert!(!p.unit_boundary.is_match("Art. 123. Tekst 1. tekst"));
    }

    #[test]
    fn test_indented_line_roles() {
        let p = patterns();
        assert!(p.point_line.is_match("@@INDENT0@@2) at work"));
        assert!(p.point_line.is_match("@@INDENT1@@3gh) Some law."));
        assert!(!p.point_line.is_match("@@INDENT1@@b) boss"));
        assert!(p.letter_line.is_match("@@INDENT1@@b) boss"));
        assert!(p.level0_line.is_match("@@INDENT1@@Art. 123. The right"));
        assert!(p.dash_line.is_match(&format!("{}{} x", indent_marker(0), DASH)));
        assert!(p.dash_line.is_match("@@INDENT2@@– he likes you"));
        assert!(!p.dash_line.is_match("– he likes you"));
        assert!(p.double_tiret_line.is_match("@@INDENT3@@– – vegetarian"));
        assert!(!p.double_tiret_line.is_match("@@INDENT3@@– not:"));
        assert!(p.triple_tiret_line.is_match("@@INDENT4@@– – – a diet"));
    }

    #[test]
    fn test_formula_phrases() {
        let p = patterns();
        assert!(p.formula_start.is_match("oblicza się według wzoru:"));
        assert!(p.formula_start.is_match("zgodnie ze wzorem:"));
        assert!(!p.formula_start.is_match("według wzoru określonego w ust. 2"));
        assert!(p.formula_end.is_match("gdzie poszczególne symbole oznaczają:"));
        assert!(p.formula_end.is_match("w którym symbole oznaczają:"));
        assert!(p.formula_end.is_match("gdzie:"));
        assert!(!p.formula_end.is_match("przy czym gdzie indziej"));
    }

    #[test]
    fn test_structural_prefix() {
        let p = patterns();
        for line in [
            "KSIĘGA PIERWSZA",
            "TYTUŁ IV",
            "DZIAŁ VIII All your base",
            "Rozdział 1 Przepisy ogólne",
            "Art. 1. Tekst",
            "§ 3ef. Some law.",
            "2cd. Some law.",
            "3gh) Some law.",
            "ij) Some law.",
            "@@INDENT0@@– tekst",
        ] {
            assert!(p.structural_prefix.is_match(line), "{}", line);
        }
        assert!(!p.structural_prefix.is_match("long to Legia Warszawa FC."));
        assert!(!p.structural_prefix.is_match("Dział, o którym mowa"));
    }

    #[test]
    fn test_indent_marker() {
        assert_eq!(indent_marker(3), "@@INDENT3@@");
        assert!(patterns().indent_marker.is_match(&indent_marker(12)));
    }
}
