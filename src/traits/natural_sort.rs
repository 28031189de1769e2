use crate::natural::natural_cmp;

/// This trait allows sorting sequences of string-like values in
/// natural order, in place.
pub trait NaturalSort {
    fn natural_sort(&mut self);
}

impl<T: AsRef<str>> NaturalSort for [T] {
    /// Sorts the slice so that embedded numbers are ordered by value,
    /// e.g. "track2" before "track10". The sort is stable and
    /// case-insensitive.
    fn natural_sort(&mut self) {
        self.sort_by(|a, b| natural_cmp(a.as_ref(), b.as_ref()));
    }
}
