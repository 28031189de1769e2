//! Miscellaneous traits to augment types in the standard library.

mod natural_sort;
mod pretty_duration;

pub use natural_sort::NaturalSort;
pub use pretty_duration::PrettyDuration;
