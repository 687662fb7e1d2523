//! Segment parser: `PULSES-STEPS(-MODIFIER)*`
//!
//! Parsing is deliberately forgiving. Numbers read only their leading
//! digits (`"8x"` is 8, `"x"` is 0), unknown modifier letters are kept as
//! [`Modifier::Unknown`] and skipped later, and mask positions that do not
//! spell a plain index are dropped. The one hard failure is a token that
//! does not even contain `PULSES-STEPS`.

use super::ast::{CompositionOp, Modifier, Program, Segment, Term};
use super::error::{EucError, Span};
use super::lexer::{SpannedToken, Token};
use std::collections::BTreeSet;
use tracing::trace;

/// Build a program from a token stream.
///
/// An operator applies to the next segment only; segments without one are
/// concatenated. A trailing operator has nothing to apply to and is dropped.
pub fn parse_program(tokens: &[SpannedToken]) -> Result<Program, EucError> {
    let mut terms = Vec::new();
    let mut pending = CompositionOp::Concat;

    for spanned in tokens {
        match &spanned.token {
            Token::Operator(op) => pending = *op,
            Token::Segment(text) => {
                let segment = parse_segment(text, spanned.span)?;
                terms.push(Term {
                    op: pending,
                    segment,
                    span: spanned.span,
                });
                pending = CompositionOp::Concat;
            }
        }
    }

    if pending != CompositionOp::Concat {
        trace!(op = %pending, "dangling operator at end of input");
    }
    Ok(Program::new(terms))
}

/// Parse one segment token such as `1-8-<(3,6)-r2`
pub fn parse_segment(text: &str, span: Span) -> Result<Segment, EucError> {
    let mut parts: Vec<&str> = text.split('-').collect();
    while parts.last().is_some_and(|p| p.is_empty()) {
        parts.pop();
    }
    if parts.len() < 2 {
        return Err(EucError::syntax(
            format!("expected PULSES-STEPS in segment '{}'", text),
            span,
        ));
    }

    let segment = Segment {
        pulses: lenient_count(parts[0]),
        steps: lenient_count(parts[1]),
        modifiers: parts[2..].iter().map(|p| parse_modifier(p)).collect(),
    };
    trace!(%segment, "parsed segment");
    Ok(segment)
}

/// Parse a single modifier: a letter followed by an optional argument
pub fn parse_modifier(part: &str) -> Modifier {
    let mut chars = part.chars();
    let Some(letter) = chars.next() else {
        return Modifier::Unknown(String::new());
    };
    let argument = chars.as_str();

    match letter {
        '>' => Modifier::MaskFalse(mask_positions(argument)),
        '<' => Modifier::MaskTrue(mask_positions(argument)),
        't' => Modifier::Take(lenient_count(argument)),
        'n' => Modifier::Repeat(lenient_count(argument)),
        'r' => Modifier::Rotate(lenient_int(argument)),
        'm' => Modifier::Mirror,
        's' => Modifier::Stretch(lenient_count(argument)),
        'R' => Modifier::Reverse,
        'd' => Modifier::Drop(lenient_count(argument)),
        '!' => Modifier::Negate,
        _ => Modifier::Unknown(part.to_string()),
    }
}

/// Positions listed in a mask argument like `(3,6)`.
///
/// The opening and closing characters are stripped without checking what
/// they are. A position only counts when it is written exactly as the index
/// would print, so `03` or ` 3` never match anything.
fn mask_positions(argument: &str) -> BTreeSet<usize> {
    let mut chars = argument.chars();
    chars.next();
    chars.next_back();
    chars
        .as_str()
        .split(',')
        .filter_map(|piece| {
            piece
                .parse::<usize>()
                .ok()
                .filter(|index| index.to_string() == piece)
        })
        .collect()
}

/// Leading integer of `text`, or 0 when there is none.
///
/// Accepts leading whitespace, an optional sign and `_` between digits, and
/// stops at the first other character. Out-of-range values saturate.
pub fn lenient_int(text: &str) -> i64 {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let mut value: i64 = 0;
    let mut previous_digit = false;
    for c in digits.chars() {
        match c {
            '0'..='9' => {
                let digit = i64::from(c as u8 - b'0');
                value = value.saturating_mul(10).saturating_add(digit);
                previous_digit = true;
            }
            '_' if previous_digit => previous_digit = false,
            _ => break,
        }
    }

    if negative {
        -value
    } else {
        value
    }
}

/// [`lenient_int`] clamped to zero for counts and lengths
fn lenient_count(text: &str) -> usize {
    usize::try_from(lenient_int(text)).unwrap_or(0)
}
