//! Matching a single literal string.

use crate::error::Error;

use super::{Suggestion, SyntaxMatch, SyntaxPart};

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn part(literal: &str) -> FixedStringSyntax {
        FixedStringSyntax::new(literal).unwrap()
    }

    #[test]
    fn empty_input_is_partial() {
        assert_eq!(part("abc").match_at("", 0), Some(SyntaxMatch::partial(0)));
    }

    #[test]
    fn prefix_of_the_literal_is_partial() {
        assert_eq!(part("abc").match_at("a", 0), Some(SyntaxMatch::partial(1)));
        assert_eq!(part("abc").match_at("ab", 0), Some(SyntaxMatch::partial(2)));
    }

    #[test]
    fn whole_literal_is_full() {
        assert_eq!(part("abc").match_at("abc", 0), Some(SyntaxMatch::full(3)));
        // trailing text belongs to the next part
        assert_eq!(
            part("abc").match_at("abcdef", 0),
            Some(SyntaxMatch::full(3))
        );
    }

    #[test]
    fn mismatch_is_no_match() {
        assert_eq!(part("abc").match_at("abd", 0), None);
        assert_eq!(part("abc").match_at("x", 0), None);
    }

    #[test]
    fn matches_from_the_given_index() {
        assert_eq!(part("abc").match_at("xxabc", 2), Some(SyntaxMatch::full(3)));
        assert_eq!(
            part("abc").match_at("xxab", 2),
            Some(SyntaxMatch::partial(2))
        );
        assert_eq!(part("abc").match_at("xxq", 2), None);
    }

    #[test]
    fn consumed_counts_bytes_of_multibyte_literals() {
        assert_eq!(
            part("café").match_at("caf", 0),
            Some(SyntaxMatch::partial(3))
        );
        assert_eq!(part("café").match_at("café", 0), Some(SyntaxMatch::full(5)));
    }

    #[test]
    fn out_of_bounds_index_is_no_match() {
        assert_eq!(part("abc").match_at("ab", 5), None);
        assert_eq!(part("abc").match_at("é", 1), None);
    }

    #[test]
    fn suggests_the_whole_literal() {
        // always the full literal, however much is already typed
        assert_eq!(part("abc").suggestions("", 0), vec![Suggestion::of("abc")]);
        assert_eq!(
            part("abc").suggestions("ab", 0),
            vec![Suggestion::of("abc")]
        );
    }

    #[test]
    fn empty_literal_is_rejected() {
        assert_matches!(FixedStringSyntax::new(""), Err(Error::EmptyLiteral));
    }
}

/// Matches one specific literal string at a position.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FixedStringSyntax {
    matcher: String,
}

impl FixedStringSyntax {
    /// Creates a part matching `matcher` exactly.
    ///
    /// Returns [`Error::EmptyLiteral`] if `matcher` is empty.
    pub fn new(matcher: impl Into<String>) -> Result<FixedStringSyntax, Error> {
        let matcher = matcher.into();
        if matcher.is_empty() {
            return Err(Error::EmptyLiteral);
        }
        Ok(FixedStringSyntax { matcher })
    }

    /// The literal this part matches.
    pub fn matcher(&self) -> &str {
        &self.matcher
    }
}

impl SyntaxPart for FixedStringSyntax {
    fn match_at(&self, value: &str, index: usize) -> Option<SyntaxMatch> {
        let mut input = value.get(index..)?.chars();
        let mut consumed = 0;
        for expected in self.matcher.chars() {
            match input.next() {
                Some(c) if c == expected => consumed += c.len_utf8(),
                // input ran out first; what we have is a valid prefix
                None => return Some(SyntaxMatch::partial(consumed)),
                Some(_) => return None,
            }
        }
        Some(SyntaxMatch::full(consumed))
    }

    fn suggestions(&self, _value: &str, _index: usize) -> Vec<Suggestion> {
        // the whole literal; the caller applies only the unmatched remainder
        vec![Suggestion::of(self.matcher.as_str())]
    }
}
