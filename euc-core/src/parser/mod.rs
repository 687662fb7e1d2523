// euc-core/src/parser/mod.rs

pub mod ast;
pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod segment_parser;


pub use ast::{CompositionOp, Modifier, Program, Segment, Term};
pub use error::{ErrorKind, EucError, Span};
pub use evaluator::{apply_modifier, evaluate, parse, Evaluator};
pub use lexer::{Lexer, PatternSource, SpannedToken, Token};
pub use segment_parser::{parse_modifier, parse_program, parse_segment};
