//! Syntax tree for pattern expressions.
//!
//! An expression such as `"3-8-r1 + 1-8 2-4"` becomes a [`Program`]: one
//! [`Term`] per segment, each carrying the operator that merges it into the
//! running result.

use super::error::Span;
use crate::types::Pattern;
use std::collections::BTreeSet;
use std::fmt;

/// How a segment is merged into the accumulated pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompositionOp {
    /// Append the segment (the implicit operator)
    #[default]
    Concat,
    /// `+`
    Or,
    /// `-`: keep accumulated onsets the segment does not hit
    AndNot,
    /// `^`
    Xor,
    /// `&`
    And,
}

impl CompositionOp {
    /// Operator for a whole token, if the token is one
    pub fn from_symbol(token: &str) -> Option<CompositionOp> {
        match token {
            "+" => Some(CompositionOp::Or),
            "-" => Some(CompositionOp::AndNot),
            "^" => Some(CompositionOp::Xor),
            "&" => Some(CompositionOp::And),
            _ => None,
        }
    }

    /// Notation symbol; `Concat` is written as juxtaposition
    pub fn symbol(&self) -> &'static str {
        match self {
            CompositionOp::Concat => "",
            CompositionOp::Or => "+",
            CompositionOp::AndNot => "-",
            CompositionOp::Xor => "^",
            CompositionOp::And => "&",
        }
    }

    /// Merge `segment` into `acc`.
    ///
    /// `Concat` grows the accumulator; every other operator works index-wise
    /// over the accumulator's existing steps and never changes its length.
    pub fn apply(self, acc: Pattern, segment: &Pattern) -> Pattern {
        match self {
            CompositionOp::Concat => acc.concat(segment),
            CompositionOp::Or => acc | segment,
            CompositionOp::AndNot => acc - segment,
            CompositionOp::Xor => acc ^ segment,
            CompositionOp::And => acc & segment,
        }
    }
}

impl fmt::Display for CompositionOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single transformation applied to a segment's pattern
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Modifier {
    /// `>(i,j,...)`
    MaskFalse(BTreeSet<usize>),
    /// `<(i,j,...)`
    MaskTrue(BTreeSet<usize>),
    /// `tN`
    Take(usize),
    /// `nN`
    Repeat(usize),
    /// `rN`
    Rotate(i64),
    /// `m`
    Mirror,
    /// `sN`
    Stretch(usize),
    /// `R`
    Reverse,
    /// `dN`
    Drop(usize),
    /// `!`
    Negate,
    /// Any other letter. Kept verbatim and skipped during evaluation.
    Unknown(String),
}

impl Modifier {
    pub fn is_unknown(&self) -> bool {
        matches!(self, Modifier::Unknown(_))
    }
}

fn write_positions(f: &mut fmt::Formatter<'_>, prefix: char, set: &BTreeSet<usize>) -> fmt::Result {
    let positions: Vec<String> = set.iter().map(|p| p.to_string()).collect();
    write!(f, "{}({})", prefix, positions.join(","))
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Modifier::MaskFalse(set) => write_positions(f, '>', set),
            Modifier::MaskTrue(set) => write_positions(f, '<', set),
            Modifier::Take(n) => write!(f, "t{}", n),
            Modifier::Repeat(n) => write!(f, "n{}", n),
            Modifier::Rotate(n) => write!(f, "r{}", n),
            Modifier::Mirror => write!(f, "m"),
            Modifier::Stretch(n) => write!(f, "s{}", n),
            Modifier::Reverse => write!(f, "R"),
            Modifier::Drop(n) => write!(f, "d{}", n),
            Modifier::Negate => write!(f, "!"),
            Modifier::Unknown(raw) => write!(f, "{}", raw),
        }
    }
}

/// One Euclidean base rhythm and its modifier chain
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub pulses: usize,
    pub steps: usize,
    /// Applied in written order
    pub modifiers: Vec<Modifier>,
}

impl Segment {
    pub fn new(pulses: usize, steps: usize) -> Self {
        Self {
            pulses,
            steps,
            modifiers: Vec::new(),
        }
    }

    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.pulses, self.steps)?;
        for modifier in &self.modifiers {
            write!(f, "-{}", modifier)?;
        }
        Ok(())
    }
}

/// A segment together with the operator that merges it
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Term {
    pub op: CompositionOp,
    pub segment: Segment,
    pub span: Span,
}

/// A parsed expression, evaluated strictly left to right
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Program {
    pub terms: Vec<Term>,
}

impl Program {
    pub fn new(terms: Vec<Term>) -> Self {
        Self { terms }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            if term.op != CompositionOp::Concat {
                write!(f, "{} ", term.op)?;
            }
            write!(f, "{}", term.segment)?;
        }
        Ok(())
    }
}
