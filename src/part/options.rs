//! Matching one of a fixed set of literal alternatives.

use std::cmp::Reverse;

use indexmap::IndexSet;
use log::debug;

use crate::error::Error;

use super::{FixedStringSyntax, Suggestion, SyntaxMatch, SyntaxPart};


/// Matches any one of a fixed set of literal strings, preferring the longest
/// alternative when several match.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StringOptionsSyntax {
    options: Vec<FixedStringSyntax>,
}

impl StringOptionsSyntax {
    /// Creates a part matching any of `options`.
    ///
    /// Duplicates collapse to their first occurrence, and the survivors are
    /// ordered longest first; options of equal length keep their relative
    /// input order. Returns [`Error::NoOptions`] for an empty list, or
    /// [`Error::EmptyLiteral`] if any option is the empty string.
    pub fn new<I>(options: I) -> Result<StringOptionsSyntax, Error>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        // "a", "b", "a" matches the same things as "a", "b"
        let unique: IndexSet<String> = options.into_iter().map(Into::into).collect();
        if unique.is_empty() {
            return Err(Error::NoOptions);
        }
        let mut options = unique
            .into_iter()
            .map(FixedStringSyntax::new)
            .collect::<Result<Vec<_>, Error>>()?;
        // stable sort, so equal lengths keep their input order
        options.sort_by_key(|option| Reverse(option.matcher().len()));
        Ok(StringOptionsSyntax { options })
    }
}

impl SyntaxPart for StringOptionsSyntax {
    fn match_at(&self, value: &str, index: usize) -> Option<SyntaxMatch> {
        let mut partial = None;
        for option in &self.options {
            match option.match_at(value, index) {
                Some(m) if m.is_full() => {
                    debug!("option {:?} fully matched at {index}", option.matcher());
                    return Some(m);
                }
                Some(m) => {
                    if partial.is_none() {
                        partial = Some(m);
                    }
                }
                None => {}
            }
        }
        partial
    }

    fn suggestions(&self, value: &str, index: usize) -> Vec<Suggestion> {
        self.options
            .iter()
            .filter(|option| option.match_at(value, index).is_some())
            .flat_map(|option| option.suggestions(value, index))
            .collect()
    }
}
