//! Line parser for the G0-G3 positional dialect
//!
//! A line is a whitespace separated list of words, each a letter from
//! `G X Y Z R F` followed by a number. Words may come in any order. Every
//! line is self-contained: there is no modal carry-over from earlier lines,
//! so `G`, `X`, `Y` and `Z` are required each time and `R` is required for
//! arcs. `R` is not read at all for straight moves, and an empty `F` word is
//! the same as no feed rate.

use gcodesketch_core::{ParseError, Point3D};
use tracing::trace;

use super::{Command, MoveKind};

/// Words collected from a single line before validation
///
/// R is kept as raw text because its meaning depends on the move kind.
#[derive(Debug, Default)]
struct Words<'a> {
    g: Option<u32>,
    x: Option<f64>,
    y: Option<f64>,
    z: Option<f64>,
    r: Option<&'a str>,
    f: Option<f64>,
}

impl<'a> Words<'a> {
    fn collect(line: &'a str) -> Result<Self, ParseError> {
        let mut words = Words::default();
        let mut seen_any = false;

        for part in line.split_whitespace() {
            seen_any = true;
            let Some(first_char) = part.chars().next() else {
                continue;
            };
            let letter = first_char.to_ascii_uppercase();
            let value = &part[first_char.len_utf8()..];

            match letter {
                'G' => {
                    let code = value.parse::<u32>().map_err(|_| ParseError::InvalidNumber {
                        field: 'G',
                        value: value.to_string(),
                    })?;
                    Self::store(&mut words.g, 'G', code)?;
                }
                'X' => Self::store(&mut words.x, 'X', parse_real('X', value)?)?,
                'Y' => Self::store(&mut words.y, 'Y', parse_real('Y', value)?)?,
                'Z' => Self::store(&mut words.z, 'Z', parse_real('Z', value)?)?,
                'R' => Self::store(&mut words.r, 'R', value)?,
                // An empty F word means no feed rate
                'F' if value.is_empty() => {}
                'F' => Self::store(&mut words.f, 'F', parse_real('F', value)?)?,
                _ => {
                    return Err(ParseError::UnknownWord {
                        word: part.to_string(),
                    })
                }
            }
        }

        if !seen_any {
            return Err(ParseError::Empty);
        }
        Ok(words)
    }

    fn store<T>(slot: &mut Option<T>, field: char, value: T) -> Result<(), ParseError> {
        if slot.is_some() {
            return Err(ParseError::DuplicateWord { field });
        }
        *slot = Some(value);
        Ok(())
    }
}

fn parse_real(field: char, value: &str) -> Result<f64, ParseError> {
    match value.parse::<f64>() {
        Ok(number) if number.is_finite() => Ok(number),
        _ => Err(ParseError::InvalidNumber {
            field,
            value: value.to_string(),
        }),
    }
}

/// Parse one line into a command
///
/// Pure function: the result depends on `line` only. Feasibility of an arc
/// radius against the current position is checked later by the interpreter,
/// because it needs the start point.
pub fn parse_line(line: &str) -> Result<Command, ParseError> {
    let words = Words::collect(line)?;

    let code = words.g.ok_or(ParseError::MissingField { field: 'G' })?;
    let kind = MoveKind::from_code(code).ok_or(ParseError::UnsupportedCommand { code })?;

    let x = words.x.ok_or(ParseError::MissingField { field: 'X' })?;
    let y = words.y.ok_or(ParseError::MissingField { field: 'Y' })?;
    let z = words.z.ok_or(ParseError::MissingField { field: 'Z' })?;

    let radius = if kind.is_arc() {
        let radius = words
            .r
            .and_then(|value| parse_real('R', value).ok())
            .ok_or(ParseError::MissingField { field: 'R' })?;
        if radius <= 0.0 {
            return Err(ParseError::NonPositiveRadius { radius });
        }
        Some(radius)
    } else {
        None
    };

    let command = Command {
        kind,
        target: Point3D::new(x, y, z),
        radius,
        feed_rate: words.f,
    };
    trace!("Parsed {:?} -> {}", line, command);
    Ok(command)
}

/// Parse a sequence of lines, stopping at the first rejected one
///
/// On failure the error is paired with the zero-based index of the line.
pub fn parse_lines<'a, I>(lines: I) -> Result<Vec<Command>, (usize, ParseError)>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .enumerate()
        .map(|(index, line)| parse_line(line).map_err(|e| (index, e)))
        .collect()
}
