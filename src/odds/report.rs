use std::fmt;
use std::io::Write;

use super::CategoryCounts;
use crate::core::{Category, PokerError};

/// One line of the probability table.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProbabilityRow {
    pub category: Category,
    pub count: u64,
    /// Share of all hands in this category, `0.0..=100.0`.
    pub percentage: f64,
}

/// The chance of being dealt each category, weakest category first.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProbabilityTable {
    pub total: u64,
    pub rows: Vec<ProbabilityRow>,
}

impl ProbabilityTable {
    /// Turn category counts into percentages of `total`.
    pub fn new(counts: &CategoryCounts, total: u64) -> Result<Self, PokerError> {
        if total == 0 {
            return Err(PokerError::EmptyEnumeration);
        }
        let rows = counts
            .iter()
            .map(|(category, count)| ProbabilityRow {
                category,
                count,
                percentage: count as f64 / total as f64 * 100.0,
            })
            .collect();
        Ok(Self { total, rows })
    }

    /// Percentages of the number of hands that were counted.
    pub fn from_counts(counts: &CategoryCounts) -> Result<Self, PokerError> {
        Self::new(counts, counts.total())
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<(), PokerError> {
        write!(out, "{}", self)?;
        out.flush()?;
        Ok(())
    }
}

impl fmt::Display for ProbabilityTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "    PROBABILITIES OF EACH 5-CARD POKER HAND")?;
        writeln!(f)?;
        writeln!(
            f,
            "{:>15}  {:>10}  {:>15}",
            "Hand Type", "Number", "Probability(%)"
        )?;
        writeln!(f)?;
        for row in &self.rows {
            writeln!(
                f,
                "{:>15} : {:>10} {:>15.6}%",
                row.category.name(),
                row.count,
                row.percentage
            )?;
        }
        Ok(())
    }
}

/// Format the probability table for `counts` out of `total` hands.
///
/// ```
/// use five_card_odds::odds::{CategoryCounts, report};
///
/// assert!(report(&CategoryCounts::new(), 0).is_err());
/// ```
pub fn report(counts: &CategoryCounts, total: u64) -> Result<String, PokerError> {
    ProbabilityTable::new(counts, total).map(|table| table.to_string())
}
