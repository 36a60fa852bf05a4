//! Exhaustive five card hand counts and the probabilities
//! that come out of them.

/// Per category hand counts.
mod counts;
pub use self::counts::CategoryCounts;

/// Walk every five card hand in a deck.
mod enumerate;
pub use self::enumerate::{enumerate, enumerate_parallel, enumerate_partition};

/// Counts to probability tables.
mod report;
pub use self::report::{ProbabilityRow, ProbabilityTable, report};
