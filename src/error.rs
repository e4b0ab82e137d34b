//! Errors arising from invalid part construction.
//!
//! Matching failure is not an error: a part that cannot match reports
//! `None`, which callers treat as a rejected grammar branch. The only
//! fallible operations are the constructors, which reject configurations
//! that could never match anything.

/// An error encountered while constructing a syntax part.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// A fixed string part was given an empty literal.
    #[error("a fixed string part cannot match an empty literal")]
    EmptyLiteral,
    /// A fixed-length number part was given a length of zero.
    #[error("a fixed-length number part must require at least one digit")]
    ZeroLengthNumber,
    /// A string-options part was given no options.
    #[error("a string-options part needs at least one option")]
    NoOptions,
}
