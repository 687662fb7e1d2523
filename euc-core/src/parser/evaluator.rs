//! Evaluates programs: Euclidean base rhythm, modifier pipeline, then
//! left-to-right composition into a single pattern.

use super::ast::{CompositionOp, Modifier, Program, Segment, Term};
use super::error::{EucError, Span};
use super::lexer::{Lexer, PatternSource};
use super::segment_parser::parse_program;
use crate::types::{EvalConfig, Pattern};
use tracing::{debug, trace};

/// Evaluate one expression or an ordered list of them with the default
/// (unbounded) configuration.
///
/// ```
/// use euc_core::parser::evaluate;
///
/// let pattern = evaluate("3-8").unwrap();
/// assert_eq!(pattern.dash(), "x--x--x-");
/// ```
pub fn evaluate<S: PatternSource + ?Sized>(input: &S) -> Result<Pattern, EucError> {
    Evaluator::new().evaluate(input)
}

/// Tokenize and parse without evaluating
pub fn parse<S: PatternSource + ?Sized>(input: &S) -> Result<Program, EucError> {
    parse_program(&Lexer::new(input).tokenize())
}

/// Apply one modifier. Unknown modifiers return the pattern unchanged.
pub fn apply_modifier(pattern: Pattern, modifier: &Modifier) -> Pattern {
    match modifier {
        Modifier::MaskFalse(positions) => pattern.mask(positions.iter().copied(), false),
        Modifier::MaskTrue(positions) => pattern.mask(positions.iter().copied(), true),
        Modifier::Take(n) => pattern.take(*n),
        Modifier::Repeat(n) => pattern.repeat(*n),
        Modifier::Rotate(n) => pattern.rotate(*n),
        Modifier::Mirror => pattern.mirror(),
        Modifier::Stretch(n) => pattern.stretch(*n),
        Modifier::Reverse => pattern.reverse(),
        Modifier::Drop(n) => pattern.drop_steps(*n),
        Modifier::Negate => pattern.negate(),
        Modifier::Unknown(_) => pattern,
    }
}

/// Largest step count a `Vec<bool>` can hold
const MAX_STEPS: usize = isize::MAX as usize;

/// Length a modifier would produce from a pattern of `len` steps,
/// `None` if no pattern can be that long
fn projected_len(modifier: &Modifier, len: usize) -> Option<usize> {
    let projected = match modifier {
        Modifier::Take(n) => Some(len.min(*n)),
        Modifier::Drop(n) => Some(len.saturating_sub(*n)),
        Modifier::Repeat(n) | Modifier::Stretch(n) => len.checked_mul(*n),
        Modifier::Mirror => len.checked_mul(2),
        _ => Some(len),
    };
    projected.filter(|&len| len <= MAX_STEPS)
}

#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    config: EvalConfig,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EvalConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    pub fn evaluate<S: PatternSource + ?Sized>(&self, input: &S) -> Result<Pattern, EucError> {
        let program = parse(input)?;
        self.run(&program)
    }

    /// Fold every term into the accumulator, starting from the empty pattern
    pub fn run(&self, program: &Program) -> Result<Pattern, EucError> {
        let mut acc = Pattern::new();
        for term in &program.terms {
            acc = self.compose(acc, term)?;
        }
        debug!(
            terms = program.len(),
            len = acc.len(),
            onsets = acc.onset_count(),
            "evaluated pattern"
        );
        Ok(acc)
    }

    fn compose(&self, acc: Pattern, term: &Term) -> Result<Pattern, EucError> {
        let segment = self.eval_segment(&term.segment, term.span)?;
        if term.op == CompositionOp::Concat {
            let len = acc
                .len()
                .checked_add(segment.len())
                .filter(|&len| len <= MAX_STEPS);
            self.check_len(len, term.span)?;
        }
        trace!(op = ?term.op, segment = %segment.dash(), "composing segment");
        Ok(term.op.apply(acc, &segment))
    }

    /// Euclidean base rhythm followed by the modifiers in written order
    pub fn eval_segment(&self, segment: &Segment, span: Span) -> Result<Pattern, EucError> {
        self.check_len(Some(segment.steps), span)?;
        let mut pattern = Pattern::euclidean(segment.pulses, segment.steps);
        for modifier in &segment.modifiers {
            self.check_len(projected_len(modifier, pattern.len()), span)?;
            if modifier.is_unknown() {
                trace!(%modifier, "skipping unknown modifier");
            }
            pattern = apply_modifier(pattern, modifier);
            trace!(%modifier, len = pattern.len(), "applied modifier");
        }
        Ok(pattern)
    }

    fn check_len(&self, len: Option<usize>, span: Span) -> Result<(), EucError> {
        match len {
            Some(len) if self.config.allows(len) => Ok(()),
            Some(len) => Err(EucError::limit_exceeded(
                format!(
                    "pattern of {} steps exceeds the limit of {}",
                    len,
                    self.config.max_len.unwrap_or(usize::MAX)
                ),
                span,
            )),
            None => Err(EucError::limit_exceeded(
                "pattern length overflows".to_string(),
                span,
            )),
        }
    }
}
