//! Syntax parts: the composable units of an incrementally-matched grammar.
//!
//! A caller holds a full input string and a cursor position marking where a
//! part should begin matching. [`SyntaxPart::match_at`] classifies the text
//! there, and [`SyntaxPart::suggestions`] offers candidate completions. All
//! parts are stateless with respect to the input: behavior depends only on
//! the arguments and the part's construction-time configuration, so a single
//! instance can be reused (and shared between threads) freely.

use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

mod fixed;
mod number;
mod options;


pub use self::fixed::FixedStringSyntax;
pub use self::number::{FixedLengthNumberSyntax, NumberSyntax};
pub use self::options::StringOptionsSyntax;

/// How much of a part's grammar the consumed text satisfies.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MatchKind {
    /// The part is completely satisfied; nothing more is required.
    Full,
    /// The consumed text is a valid prefix; more input could complete the
    /// part.
    Partial,
}

/// A successful (full or partial) match of one part at one position.
///
/// The absence of a match ("this text can never match here, however it is
/// extended") is represented as `None`, not as a value of this type.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SyntaxMatch {
    pub kind: MatchKind,
    /// Number of bytes, starting at the match position, that belong to this
    /// part.
    pub consumed: usize,
}

impl SyntaxMatch {
    /// A complete match consuming the given number of bytes.
    pub fn full(consumed: usize) -> SyntaxMatch {
        SyntaxMatch {
            kind: MatchKind::Full,
            consumed,
        }
    }

    /// An extensible prefix match consuming the given number of bytes.
    pub fn partial(consumed: usize) -> SyntaxMatch {
        SyntaxMatch {
            kind: MatchKind::Partial,
            consumed,
        }
    }

    pub fn is_full(&self) -> bool {
        self.kind == MatchKind::Full
    }
}

/// A candidate completion for the text at a matched position.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Suggestion {
    /// Text displayed for this candidate.
    pub show_as: String,
    /// Text inserted if the candidate is accepted, or `None` if the
    /// candidate is a placeholder with no concrete text to insert.
    pub value: Option<String>,
}

impl Suggestion {
    /// A concrete suggestion whose display and inserted text are the same.
    pub fn of(text: impl Into<String>) -> Suggestion {
        let text = text.into();
        Suggestion {
            show_as: text.clone(),
            value: Some(text),
        }
    }

    /// A placeholder suggestion with a label but no insertable text.
    pub fn placeholder(label: impl Into<String>) -> Suggestion {
        Suggestion {
            show_as: label.into(),
            value: None,
        }
    }

    /// Joins this suggestion with the suggestion of an adjacent part.
    ///
    /// Display texts concatenate unconditionally. The joined value is
    /// concrete only when both sides are concrete; a placeholder on either
    /// side leaves nothing definite to insert.
    pub fn join(&self, next: &Suggestion) -> Suggestion {
        Suggestion {
            show_as: format!("{}{}", self.show_as, next.show_as),
            value: match (&self.value, &next.value) {
                (Some(a), Some(b)) => Some(format!("{a}{b}")),
                _ => None,
            },
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.show_as)
    }
}

/// One composable unit of a grammar.
///
/// `value` is the full input string and `index` the byte offset at which
/// this part begins matching. An `index` that is out of bounds or not on a
/// character boundary is a non-match, never a panic.
pub trait SyntaxPart {
    /// Classifies the text at `index` as a full match, a partial match, or
    /// (`None`) a non-match of this part's grammar.
    ///
    /// At the exact end of the input a part reports a partial match rather
    /// than failing, as long as nothing seen so far violates its grammar.
    fn match_at(&self, value: &str, index: usize) -> Option<SyntaxMatch>;

    /// Candidate completions at `index`, in preference order.
    ///
    /// Meaningful when [`match_at`](SyntaxPart::match_at) reports a match at
    /// the same arguments; defined (but not useful) otherwise.
    fn suggestions(&self, value: &str, index: usize) -> Vec<Suggestion>;
}

impl<P: ?Sized + SyntaxPart> SyntaxPart for &P {
    fn match_at(&self, value: &str, index: usize) -> Option<SyntaxMatch> {
        (**self).match_at(value, index)
    }

    fn suggestions(&self, value: &str, index: usize) -> Vec<Suggestion> {
        (**self).suggestions(value, index)
    }
}

macro_rules! ptr_part {
    ($($id:ident)*) => {
        $(
            impl<P: ?Sized + SyntaxPart> SyntaxPart for $id<P> {
                fn match_at(&self, value: &str, index: usize) -> Option<SyntaxMatch> {
                    (**self).match_at(value, index)
                }

                fn suggestions(&self, value: &str, index: usize) -> Vec<Suggestion> {
                    (**self).suggestions(value, index)
                }
            }
        )*
    }
}

ptr_part! { Box Rc Arc }
