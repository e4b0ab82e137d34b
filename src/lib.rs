//! Incremental matching of structured text against composable syntax parts.
//!
//! A grammar is assembled from [`SyntaxPart`]s, each responsible for one
//! segment of a structured value (a literal, a number, one of a set of
//! keywords). At every keystroke a caller can classify the text at the
//! cursor as a full match, a still-extensible partial match, or a non-match,
//! and ask for candidate completions of the unfinished remainder.

pub mod error;
pub mod part;

pub use crate::error::Error;
pub use crate::part::{
    FixedLengthNumberSyntax, FixedStringSyntax, MatchKind, NumberSyntax, StringOptionsSyntax,
    Suggestion, SyntaxMatch, SyntaxPart,
};
