//! Amendment marker removal.
//!
//! Unified texts show text about to leave force as italics wrapped in
//! `[`...`]` and text about to enter force as bold wrapped in `<`...`>`.
//! Either section may cover many runs, and an outgoing section may be
//! followed by an upcoming one inside the same run. Both versions stay in
//! the output, undecorated, one after the other.

use super::patterns::Patterns;
use crate::error::{Error, Result};
use crate::model::{Run, Span};

/// Which amendment section the scan is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Neutral,
    Outgoing,
    Upcoming,
}

impl Section {
    fn name(self) -> &'static str {
        match self {
            Section::Neutral => "neutral",
            Section::Outgoing => "outgoing",
            Section::Upcoming => "upcoming",
        }
    }
}

/// New text for a run (`None` = keep as is) and the section after it.
type Step = (Option<String>, Section);

/// Strip amendment brackets and resolve every run to undecorated text.
///
/// Only runs set in `body_size` take part. Footnote bodies and reference
/// markers in other sizes may sit inside a section without its styling;
/// they pass through untouched and leave the section as it was.
///
/// Inline style is consumed: every run leaves with its spans cleared.
/// Runs emptied by bracket removal are dropped.
pub fn unwrap_amendments(
    runs: &mut Vec<Run>,
    patterns: &Patterns,
    body_size: Option<u32>,
) -> Result<()> {
    let mut section = Section::Neutral;
    let mut rewritten = 0;
    let mut skipped = 0;

    for run in runs.iter_mut() {
        if run.font_size != body_size {
            run.spans.clear();
            skipped += 1;
            continue;
        }

        let (text, next) = match section {
            Section::Neutral => neutral(run, patterns),
            Section::Outgoing => outgoing(run)?,
            Section::Upcoming => upcoming(run)?,
        };
        match text {
            Some(text) => {
                run.set_text(text);
                rewritten += 1;
            }
            None => run.spans.clear(),
        }
        section = next;
    }

    if section != Section::Neutral {
        log::warn!("document ends inside an {} amendment section", section.name());
    }
    runs.retain(|run| !run.is_blank());
    log::debug!(
        "unwrapped amendment markers in {} runs, {} runs outside body size",
        rewritten,
        skipped
    );
    Ok(())
}

fn neutral(run: &Run, patterns: &Patterns) -> Step {
    let text = run.text.trim();
    if uniform(&run.spans, |s| s.italic) {
        if let Some(rest) = text.strip_prefix('[') {
            return close_or_stay(rest, ']', Section::Outgoing);
        }
    }
    if uniform(&run.spans, |s| s.bold) {
        if let Some(rest) = text.strip_prefix('<') {
            return close_or_stay(rest, '>', Section::Upcoming);
        }
    }

    // "<b>Art. 20.</b> <i>[1. ...</i>": a plain heading opening an outgoing body.
    if let Some((heading, body)) = split_styled(&run.spans, |s| s.bold, |s| s.italic) {
        if patterns.level0_heading.is_match(&heading) {
            if let Some(rest) = body.strip_prefix('[') {
                let (body, section) = close_or_stay(rest, ']', Section::Outgoing);
                let body = body.unwrap_or_default();
                return (Some(format!("{} {}", heading, body)), section);
            }
        }
    }

    (None, Section::Neutral)
}

fn outgoing(run: &Run) -> Result<Step> {
    if uniform(&run.spans, |s| s.italic) {
        return Ok(close_or_stay(run.text.trim(), ']', Section::Outgoing));
    }

    // "<i>...]</i> <b><...</b>": the upcoming version starts in the same run.
    if let Some((old, new)) = split_styled(&run.spans, |s| s.italic, |s| s.bold) {
        if let (Some(old), Some(new)) = (old.strip_suffix(']'), new.strip_prefix('<')) {
            let (new, section) = close_or_stay(new, '>', Section::Upcoming);
            let new = new.unwrap_or_default();
            return Ok((Some(format!("{} {}", old.trim_end(), new)), section));
        }
    }

    Err(Error::UnexpectedStyle {
        expected: "italics",
        section: Section::Outgoing.name(),
        location: run.location(),
    })
}

fn upcoming(run: &Run) -> Result<Step> {
    if uniform(&run.spans, |s| s.bold) {
        return Ok(close_or_stay(run.text.trim(), '>', Section::Upcoming));
    }

    // The producer sometimes leaves the closing ">" or ".>" outside the bold span.
    if let Some((new, rest)) = split_styled(&run.spans, |s| s.bold, |s| !s.bold) {
        if let Some(tail) = rest.strip_suffix('>').filter(|t| t.is_empty() || *t == ".") {
            return Ok((Some(format!("{}{}", new, tail)), Section::Neutral));
        }
    }

    Err(Error::UnexpectedStyle {
        expected: "bold",
        section: Section::Upcoming.name(),
        location: run.location(),
    })
}

/// Strip `close` from the end of `text` and leave the section if present.
fn close_or_stay(text: &str, close: char, section: Section) -> Step {
    let text = text.trim();
    match text.strip_suffix(close) {
        Some(body) => (Some(body.trim_end().to_string()), Section::Neutral),
        None => (Some(text.to_string()), section),
    }
}

/// Every non-blank span satisfies `style`, and there is at least one.
fn uniform(spans: &[Span], style: impl Fn(&Span) -> bool) -> bool {
    let mut visible = spans.iter().filter(|s| !s.is_blank()).peekable();
    visible.peek().is_some() && visible.all(style)
}

/// Split the spans into a non-empty prefix in the `head` style and a
/// non-empty suffix in the `tail` style, returning both texts trimmed.
fn split_styled(
    spans: &[Span],
    head: impl Fn(&Span) -> bool,
    tail: impl Fn(&Span) -> bool,
) -> Option<(String, String)> {
    let boundary = spans.iter().position(|s| !s.is_blank() && !head(s))?;
    let (head_spans, tail_spans) = spans.split_at(boundary);
    if !tail_spans.iter().filter(|s| !s.is_blank()).all(tail) {
        return None;
    }

    let head_text = concat(head_spans);
    let head_text = head_text.trim();
    if head_text.is_empty() {
        return None;
    }
    Some((head_text.to_string(), concat(tail_spans).trim().to_string()))
}

fn concat(spans: &[Span]) -> String {
    spans.iter().map(|s| s.text.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn styled(spans: Vec<Span>, top: i64) -> Run {
        Run::styled(spans, top, 96, 10, 18)
    }

    fn unwrap(mut runs: Vec<Run>) -> Result<Vec<String>> {
        let patterns = Patterns::new().unwrap();
        unwrap_amendments(&mut runs, &patterns, None)?;
        assert!(runs.iter().all(|r| r.spans.is_empty()));
        Ok(runs.into_iter().map(|r| r.text).collect())
    }

    #[test]
    fn test_outgoing_then_upcoming_sections() {
        let runs = vec![
            styled(vec![Span::italic("[All your base")], 100),
            styled(vec![Span::italic("are belong to")], 110),
            styled(vec![Span::italic("Legia Warszawa FC.]")], 120),
            styled(vec![Span::plain("The right to consume sausages shall not be abrogated.")], 130),
            styled(vec![Span::bold("<Chopin must be heard")], 140),
            styled(vec![Span::bold("at least")], 150),
            styled(vec![Span::bold("per week.>")], 160),
        ];
        assert_eq!(
            unwrap(runs).unwrap(),
            vec![
                "All your base",
                "are belong to",
                "Legia Warszawa FC.",
                "The right to consume sausages shall not be abrogated.",
                "Chopin must be heard",
                "at least",
                "per week.",
            ]
        );
    }

    #[test]
    fn test_single_run_sections() {
        let runs = vec![
            styled(vec![Span::italic("[uchylony]"), Span::plain(" ")], 100),
            styled(vec![Span::bold("<dodany>")], 110),
            styled(vec![Span::plain("dalej")], 120),
        ];
        assert_eq!(unwrap(runs).unwrap(), vec!["uchylony", "dodany", "dalej"]);
    }

    #[test]
    fn test_bold_spans_separated_by_whitespace() {
        let runs = vec![
            styled(vec![Span::bold("<Art. 5aa. 1.  Komendant może upoważnić ")], 100),
            styled(
                vec![
                    Span::bold("podległych  funkcjonariuszy  do  załatwiania"),
                    Span::plain(" "),
                    Span::bold("spraw  w jego "),
                ],
                110,
            ),
            styled(vec![Span::bold("wydanych na podstawie ustawy.>"), Span::plain(" ")], 120),
            styled(vec![Span::bold("Art. 5b."), Span::plain(" Kierownicy ... ")], 130),
        ];
        assert_eq!(
            unwrap(runs).unwrap(),
            vec![
                "Art. 5aa. 1.  Komendant może upoważnić",
                "podległych  funkcjonariuszy  do  załatwiania spraw  w jego",
                "wydanych na podstawie ustawy.",
                "Art. 5b. Kierownicy ... ",
            ]
        );
    }

    #[test]
    fn test_heading_opens_outgoing_section() {
        let runs = vec![
            styled(
                vec![
                    Span::bold("Art. 20."),
                    Span::plain(" "),
                    Span::italic("[1.  Świadczenia  opieki  zdrowotnej "),
                ],
                100,
            ),
            styled(vec![Span::italic("zawarł umowę.]"), Span::plain(" ")], 110),
            styled(vec![Span::bold("<1. Świadczenia ")], 120),
            styled(vec![Span::bold("zdrowotnej.> ")], 130),
            styled(vec![Span::plain("1a. Na  liście  ... ")], 140),
        ];
        assert_eq!(
            unwrap(runs).unwrap(),
            vec![
                "Art. 20. 1.  Świadczenia  opieki  zdrowotnej",
                "zawarł umowę.",
                "1. Świadczenia",
                "zdrowotnej.",
                "1a. Na  liście  ... ",
            ]
        );
    }

    #[test]
    fn test_nested_heading_inside_outgoing_bracket() {
        let runs = vec![
            styled(vec![Span::italic("zezwolenia ... ostateczna.] ")], 100),
            styled(
                vec![
                    Span::italic("["),
                    Span {
                        text: "Art. 16g.".to_string(),
                        bold: true,
                        italic: true,
                    },
                ],
                110,
            ),
            styled(vec![Span::italic("1.  Organy  administracji  miar ")], 120),
            styled(vec![Span::italic("art. 21 ust. 1 pkt 1 i 4, ust. 2 i 4.] ")], 130),
        ];
        assert_eq!(
            unwrap(runs).unwrap(),
            vec![
                "zezwolenia ... ostateczna.] ",
                "Art. 16g.",
                "1.  Organy  administracji  miar",
                "art. 21 ust. 1 pkt 1 i 4, ust. 2 i 4.",
            ]
        );
    }

    #[test]
    fn test_outgoing_closes_into_upcoming_in_one_run() {
        let runs = vec![
            styled(vec![Span::italic("[1. Jeżeli konieczność, w tym ")], 100),
            styled(
                vec![
                    Span::italic("publicznej  wiadomości  informacji:]"),
                    Span::plain(" "),
                    Span::bold("<Jeżeli  konieczność  wprowadzenia  zmiany "),
                ],
                110,
            ),
            styled(vec![Span::bold("internetowej informacji:>"), Span::plain(" ")], 120),
            styled(vec![Span::plain("1)  o  zmianie  warunków ")], 130),
        ];
        assert_eq!(
            unwrap(runs).unwrap(),
            vec![
                "1. Jeżeli konieczność, w tym",
                "publicznej  wiadomości  informacji: Jeżeli  konieczność  wprowadzenia  zmiany",
                "internetowej informacji:",
                "1)  o  zmianie  warunków ",
            ]
        );
    }

    #[test]
    fn test_decorations_in_mixed_runs_are_kept() {
        let runs = vec![
            styled(
                vec![
                    Span::plain("1)  podpisanego  podpisem  elektronicznym  "),
                    Span::italic("[lub  podpisem "),
                ],
                100,
            ),
            styled(
                vec![
                    Span::italic("zaufanym]"),
                    Span::plain(" "),
                    Span::bold("<podpisem osobistym>"),
                    Span::plain(" lub "),
                ],
                110,
            ),
        ];
        assert_eq!(
            unwrap(runs).unwrap(),
            vec![
                "1)  podpisanego  podpisem  elektronicznym  [lub  podpisem ",
                "zaufanym] <podpisem osobistym> lub ",
            ]
        );
    }

    #[test]
    fn test_closing_marker_outside_bold_span() {
        let runs = vec![
            styled(vec![Span::bold("<Nowe brzmienie")], 100),
            styled(vec![Span::bold("ustawy"), Span::plain(".>")], 110),
            styled(vec![Span::bold("<Inne")], 120),
            styled(vec![Span::bold("brzmienie."), Span::plain(">")], 130),
        ];
        assert_eq!(
            unwrap(runs).unwrap(),
            vec!["Nowe brzmienie", "ustawy.", "Inne", "brzmienie."]
        );
    }

    #[test]
    fn test_plain_run_inside_outgoing_section_is_fatal() {
        let runs = vec![
            styled(vec![Span::italic("[Stary tekst")], 100),
            styled(vec![Span::plain("zwykły tekst")], 110),
        ];
        match unwrap(runs).unwrap_err() {
            Error::UnexpectedStyle {
                expected,
                section,
                location,
            } => {
                assert_eq!(expected, "italics");
                assert_eq!(section, "outgoing");
                assert_eq!(location.top, 110);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_plain_run_inside_upcoming_section_is_fatal() {
        let runs = vec![
            styled(vec![Span::bold("<Nowy tekst")], 100),
            styled(vec![Span::italic("kursywa")], 110),
        ];
        assert!(matches!(
            unwrap(runs),
            Err(Error::UnexpectedStyle { section: "upcoming", .. })
        ));
    }

    #[test]
    fn test_section_open_at_end_is_not_fatal() {
        let runs = vec![
            styled(vec![Span::bold("<Nowy tekst")], 100),
            styled(vec![Span::bold("bez końca")], 110),
        ];
        assert_eq!(unwrap(runs).unwrap(), vec!["Nowy tekst", "bez końca"]);
    }

    #[test]
    fn test_bracket_only_run_is_dropped() {
        let runs = vec![
            styled(vec![Span::italic("[")], 100),
            styled(vec![Span::italic("uchylony]")], 110),
        ];
        assert_eq!(unwrap(runs).unwrap(), vec!["uchylony"]);
    }

    #[test]
    fn test_runs_outside_body_size_keep_the_section() {
        let patterns = Patterns::new().unwrap();
        let sized = |run: Run, size| Run {
            font_size: Some(size),
            ..run
        };
        let mut runs = vec![
            sized(styled(vec![Span::italic("[Art. 5")], 100), 18),
            sized(styled(vec![Span::plain("1")], 99), 12),
            sized(styled(vec![Span::italic(". Stary tekst.]")], 100), 18),
            sized(styled(vec![Span::plain("zwykły tekst")], 110), 18),
        ];
        unwrap_amendments(&mut runs, &patterns, Some(18)).unwrap();
        let texts: Vec<&str> = runs.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["Art. 5", "1", ". Stary tekst.", "zwykły tekst"]);
    }
}
