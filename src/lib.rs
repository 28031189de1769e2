//! Natural track ordering and duration display for music players.
//!
//! Track listings sort the way a person expects ("Track 2" before
//! "Track 10") and track lengths print as "3:07" or "1:04:35".

mod duration;
mod natural;
mod traits;

pub use duration::format_secs;
pub use natural::natural_cmp;
pub use traits::{NaturalSort, PrettyDuration};
