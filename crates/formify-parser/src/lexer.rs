//! Line splitting and token-level combinators for field descriptions.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_until, take_while},
    character::complete::char,
    combinator::{eof, value},
    sequence::{pair, preceded, terminated},
    IResult,
};

/// A line of input with its position.
#[derive(Debug, Clone)]
pub struct Line<'a> {
    /// The line as it appeared in the input.
    pub raw: &'a str,
    /// The line with a trailing carriage return removed.
    pub content: &'a str,
    pub line_number: usize,
}

/// Trim the whole input and split it on `\n`.
///
/// Blank lines are kept so they can be reported as malformed. Empty input
/// yields a single empty line.
pub fn split_lines(input: &str) -> Vec<Line<'_>> {
    input
        .trim()
        .split('\n')
        .enumerate()
        .map(|(i, raw)| Line {
            raw,
            content: raw.strip_suffix('\r').unwrap_or(raw),
            line_number: i + 1,
        })
        .collect()
}

/// Characters that end a line and may not appear inside one.
pub fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Everything before the first `(`.
pub fn label(input: &str) -> IResult<&str, &str> {
    take_until("(")(input)
}

/// The `required` / `optional` keyword, matched exactly.
pub fn requirement(input: &str) -> IResult<&str, bool> {
    alt((value(true, tag("required")), value(false, tag("optional"))))(input)
}

/// `, required)` or `, optional)` followed by end of line.
pub fn requirement_suffix(input: &str) -> IResult<&str, bool> {
    terminated(
        preceded(pair(char(','), take_while(char::is_whitespace)), requirement),
        pair(char(')'), eof),
    )(input)
}

/// The type tag: the shortest run of text followed by a requirement suffix.
///
/// Returns the tag and the requirement flag.
pub fn kind_and_requirement(input: &str) -> IResult<&str, (&str, bool)> {
    for (idx, _) in input.match_indices(',') {
        if let Ok((rest, required)) = requirement_suffix(&input[idx..]) {
            return Ok((rest, (&input[..idx], required)));
        }
    }
    Err(nom::Err::Error(nom::error::Error::new(
        input,
        nom::error::ErrorKind::TakeUntil,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_keeps_blank_lines() {
        let lines = split_lines("  A (text, required)\n\nB (text, optional)\n  ");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].content, "");
        assert_eq!(lines[2].line_number, 3);
    }

    #[test]
    fn test_split_lines_empty_input() {
        let lines = split_lines("   ");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].content, "");
    }

    #[test]
    fn test_split_lines_strips_carriage_return() {
        let lines = split_lines("A (text, required)\r\nB (text, optional)");
        assert_eq!(lines[0].content, "A (text, required)");
        assert_eq!(lines[0].raw, "A (text, required)\r");
    }

    #[test]
    fn test_requirement_suffix() {
        assert_eq!(requirement_suffix(", required)"), Ok(("", true)));
        assert_eq!(requirement_suffix(",optional)"), Ok(("", false)));
        assert!(requirement_suffix(", Required)").is_err());
        assert!(requirement_suffix(", required) ").is_err());
    }

    #[test]
    fn test_kind_and_requirement_picks_suffix_comma() {
        let (_, (kind, required)) = kind_and_requirement("a, b, optional)").unwrap();
        assert_eq!(kind, "a, b");
        assert!(!required);
    }
}
