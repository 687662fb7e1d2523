use std::fmt;

/// Location of a token: which input string, byte offset and byte length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub source: usize,
    pub offset: usize,
    pub len: usize,
}

impl Span {
    pub fn new(source: usize, offset: usize, len: usize) -> Self {
        Self {
            source,
            offset,
            len,
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "input {}, column {}", self.source, self.offset + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// A segment that is not `PULSES-STEPS[-MODIFIER...]`
    Syntax,
    /// A pattern outgrew the configured `max_len`
    LimitExceeded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EucError {
    pub kind: ErrorKind,
    pub message: String,
    pub span: Span,
}

impl EucError {
    pub fn new(kind: ErrorKind, message: String, span: Span) -> Self {
        Self {
            kind,
            message,
            span,
        }
    }

    pub fn syntax(message: String, span: Span) -> Self {
        Self::new(ErrorKind::Syntax, message, span)
    }

    pub fn limit_exceeded(message: String, span: Span) -> Self {
        Self::new(ErrorKind::LimitExceeded, message, span)
    }
}

impl fmt::Display for EucError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.kind {
            ErrorKind::Syntax => "Syntax error",
            ErrorKind::LimitExceeded => "Limit exceeded",
        };
        write!(f, "{} at {}: {}", label, self.span, self.message)
    }
}

impl std::error::Error for EucError {}
