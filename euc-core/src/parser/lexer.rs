//! Tokenizer for pattern expressions.
//!
//! Input is split on runs of whitespace. A token that is exactly `+`, `-`,
//! `^` or `&` is a composition operator; anything else is a segment such as
//! `3-8-r2`. Several input strings are tokenized in order into one stream.

use super::ast::CompositionOp;
use super::error::Span;
use std::fmt;
use tracing::trace;

/// Anything that can be evaluated: a single string or an ordered list of them
pub trait PatternSource {
    fn sources(&self) -> Vec<&str>;
}

impl PatternSource for str {
    fn sources(&self) -> Vec<&str> {
        vec![self]
    }
}

impl PatternSource for String {
    fn sources(&self) -> Vec<&str> {
        vec![self.as_str()]
    }
}

impl<T: AsRef<str>> PatternSource for [T] {
    fn sources(&self) -> Vec<&str> {
        self.iter().map(AsRef::as_ref).collect()
    }
}

impl<T: AsRef<str>, const N: usize> PatternSource for [T; N] {
    fn sources(&self) -> Vec<&str> {
        self.as_slice().sources()
    }
}

impl<T: AsRef<str>> PatternSource for Vec<T> {
    fn sources(&self) -> Vec<&str> {
        self.as_slice().sources()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Token {
    Operator(CompositionOp),
    /// Raw segment text, parsed later
    Segment(String),
}

impl Token {
    fn classify(text: &str) -> Token {
        match CompositionOp::from_symbol(text) {
            Some(op) => Token::Operator(op),
            None => Token::Segment(text.to_string()),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Operator(op) => write!(f, "{}", op),
            Token::Segment(text) => write!(f, "{}", text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpannedToken {
    pub token: Token,
    pub span: Span,
}

pub struct Lexer<'a> {
    sources: Vec<&'a str>,
}

impl<'a> Lexer<'a> {
    pub fn new<S: PatternSource + ?Sized>(input: &'a S) -> Self {
        Lexer {
            sources: input.sources(),
        }
    }

    /// Split every source into tokens, preserving order across sources
    pub fn tokenize(&self) -> Vec<SpannedToken> {
        let mut tokens = Vec::new();
        for (source, text) in self.sources.iter().enumerate() {
            let mut start: Option<usize> = None;
            for (offset, c) in text.char_indices() {
                match (c.is_whitespace(), start) {
                    (true, Some(begin)) => {
                        tokens.push(Self::spanned(text, source, begin, offset));
                        start = None;
                    }
                    (false, None) => start = Some(offset),
                    _ => {}
                }
            }
            if let Some(begin) = start {
                tokens.push(Self::spanned(text, source, begin, text.len()));
            }
        }
        trace!(count = tokens.len(), "tokenized pattern input");
        tokens
    }

    fn spanned(text: &str, source: usize, begin: usize, end: usize) -> SpannedToken {
        SpannedToken {
            token: Token::classify(&text[begin..end]),
            span: Span::new(source, begin, end - begin),
        }
    }
}
