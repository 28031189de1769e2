//! Compares strings in natural order, i.e. with embedded numbers
//! compared by value rather than character by character.

use itertools::{EitherOrBoth, Itertools};
use std::cmp::Ordering;

/// A maximal run of either ASCII digits or non-digit characters.
#[derive(Debug, PartialEq, Eq)]
struct Run<'a> {
    kind: Kind,
    text: &'a str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Kind {
    Digits,
    Other,
}

/// Splits `text` into alternating digit and non-digit runs.
struct Runs<'a> {
    rest: &'a str,
}

fn runs(text: &str) -> Runs<'_> {
    Runs { rest: text }
}

impl<'a> Iterator for Runs<'a> {
    type Item = Run<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.rest.chars().next()?;
        let kind = match first.is_ascii_digit() {
            true => Kind::Digits,
            false => Kind::Other,
        };

        // The run ends at the first character of the other kind
        let end = self
            .rest
            .char_indices()
            .find(|(_, c)| c.is_ascii_digit() != (kind == Kind::Digits))
            .map(|(i, _)| i)
            .unwrap_or(self.rest.len());

        let (text, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(Run { kind, text })
    }
}

/// Compares two strings in natural order.
///
/// Both strings are lower-cased, split into digit and non-digit runs
/// and compared run by run: digit runs by numeric value, other runs
/// lexicographically. A digit run sorts before a non-digit run in the
/// same position, and when one string runs out of runs it sorts first.
///
/// Suitable as a comparator for [`slice::sort_by`].
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let (a, b) = (a.to_lowercase(), b.to_lowercase());

    for pair in runs(&a).zip_longest(runs(&b)) {
        let ordering = match pair {
            EitherOrBoth::Both(x, y) => cmp_runs(&x, &y),
            EitherOrBoth::Left(_) => Ordering::Greater,
            EitherOrBoth::Right(_) => Ordering::Less,
        };

        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    Ordering::Equal
}

fn cmp_runs(a: &Run, b: &Run) -> Ordering {
    match (a.kind, b.kind) {
        (Kind::Digits, Kind::Digits) => cmp_digits(a.text, b.text),
        (Kind::Digits, Kind::Other) => Ordering::Less,
        (Kind::Other, Kind::Digits) => Ordering::Greater,
        (Kind::Other, Kind::Other) => a.text.cmp(b.text),
    }
}

/// Compares two digit runs by numeric value. With the leading zeros
/// stripped, the longer run is the larger number and equal-length runs
/// compare bytewise, so runs of any length compare without overflow.
fn cmp_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
