//! Matching runs of decimal digits.

use crate::error::Error;

use super::{Suggestion, SyntaxMatch, SyntaxPart};


/// Extracts the maximal run of decimal digits starting at `index`.
///
/// Returns the digits found (possibly empty, when `index` is at the end of
/// the input and digits could still be typed), or `None` when the next
/// character is not a digit. Only the ten ASCII digits count as digits.
fn digit_run(value: &str, index: usize) -> Option<&str> {
    let rest = value.get(index..)?;
    let end = rest
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(rest.len(), |(i, _)| i);
    if end == 0 && !rest.is_empty() {
        return None;
    }
    Some(&rest[..end])
}

/// Matches a run of one or more digits of any length.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NumberSyntax;

impl NumberSyntax {
    pub fn new() -> NumberSyntax {
        NumberSyntax
    }
}

impl SyntaxPart for NumberSyntax {
    fn match_at(&self, value: &str, index: usize) -> Option<SyntaxMatch> {
        let run = digit_run(value, index)?;
        if run.is_empty() {
            // nothing typed yet, but digits could follow
            Some(SyntaxMatch::partial(0))
        } else {
            // any non-empty run is already a complete number
            Some(SyntaxMatch::full(run.len()))
        }
    }

    fn suggestions(&self, value: &str, index: usize) -> Vec<Suggestion> {
        match digit_run(value, index) {
            Some(run) if !run.is_empty() => vec![Suggestion::of(run)],
            _ => vec![Suggestion::placeholder("{number}")],
        }
    }
}

/// Matches exactly a fixed count of digits, completing shorter runs by
/// right-padding them with zeros.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FixedLengthNumberSyntax {
    length: usize,
}

impl FixedLengthNumberSyntax {
    /// Creates a part requiring exactly `length` digits.
    ///
    /// Returns [`Error::ZeroLengthNumber`] if `length` is zero.
    pub fn new(length: usize) -> Result<FixedLengthNumberSyntax, Error> {
        if length == 0 {
            return Err(Error::ZeroLengthNumber);
        }
        Ok(FixedLengthNumberSyntax { length })
    }

    /// The exact number of digits this part requires.
    pub fn length(&self) -> usize {
        self.length
    }
}

impl SyntaxPart for FixedLengthNumberSyntax {
    fn match_at(&self, value: &str, index: usize) -> Option<SyntaxMatch> {
        let run = digit_run(value, index)?;
        match run.len() {
            n if n == self.length => Some(SyntaxMatch::full(n)),
            n if n < self.length => Some(SyntaxMatch::partial(n)),
            // an overlong run can never shrink back to the required length
            _ => None,
        }
    }

    fn suggestions(&self, value: &str, index: usize) -> Vec<Suggestion> {
        match digit_run(value, index) {
            Some(run) if !run.is_empty() && run.len() <= self.length => {
                let width = self.length;
                vec![Suggestion::of(format!("{run:0<width$}"))]
            }
            _ => vec![Suggestion::placeholder(format!(
                "{{{} digits}}",
                self.length
            ))],
        }
    }
}
