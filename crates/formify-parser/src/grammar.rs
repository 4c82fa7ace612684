//! Grammar rules for field-description lines.
//!
//! A line is `Label (type, required|optional)`. The label ends at the first
//! `(`; the type runs up to the comma that introduces the trailing keyword.

use nom::{character::complete::char, sequence::preceded, sequence::tuple, IResult};
use tracing::debug;

use formify_core::{FieldSpec, ParseError};

use crate::lexer::*;

/// Parse a complete field description.
pub fn parse(input: &str) -> Result<Vec<FieldSpec>, ParseError> {
    let lines = split_lines(input);
    let fields = lines.iter().map(parse_line).collect::<Result<Vec<_>, _>>()?;
    debug!(fields = fields.len(), "parsed field description");
    Ok(fields)
}

/// Parse a single line into a field.
pub fn parse_line(line: &Line<'_>) -> Result<FieldSpec, ParseError> {
    let malformed = || ParseError::MalformedFieldLine {
        line: line.content.to_string(),
        line_number: line.line_number,
    };

    if line.content.chars().any(is_line_terminator) {
        debug!(line = line.line_number, "line terminator inside field line");
        return Err(malformed());
    }

    let (_, (label, (kind, required))) = field_line(line.content).map_err(|_| {
        debug!(line = line.line_number, "field line does not match grammar");
        malformed()
    })?;

    let label = label.trim();
    if label.is_empty() {
        debug!(line = line.line_number, "field line has an empty label");
        return Err(malformed());
    }

    Ok(FieldSpec::new(label, kind.trim(), required))
}

fn field_line(input: &str) -> IResult<&str, (&str, (&str, bool))> {
    tuple((label, preceded(char('('), kind_and_requirement)))(input)
}
