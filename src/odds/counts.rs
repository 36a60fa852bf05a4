use std::iter::Sum;
use std::ops::{Add, AddAssign, Index};

use crate::core::{Category, NUM_CATEGORIES};

/// How many hands landed in each category.
///
/// Counts from disjoint sets of hands can be added together, the
/// order they are added in doesn't matter.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CategoryCounts {
    counts: [u64; NUM_CATEGORIES],
}

impl CategoryCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more hand of `category`.
    pub fn record(&mut self, category: Category) {
        self.counts[category.index()] += 1;
    }

    pub fn get(&self, category: Category) -> u64 {
        self.counts[category.index()]
    }

    /// Number of hands counted across every category.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Each category with its count, weakest category first.
    pub fn iter(&self) -> impl Iterator<Item = (Category, u64)> + '_ {
        Category::categories()
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }
}

impl From<[u64; NUM_CATEGORIES]> for CategoryCounts {
    fn from(counts: [u64; NUM_CATEGORIES]) -> Self {
        Self { counts }
    }
}

impl Index<Category> for CategoryCounts {
    type Output = u64;

    fn index(&self, category: Category) -> &u64 {
        &self.counts[category.index()]
    }
}

impl AddAssign for CategoryCounts {
    fn add_assign(&mut self, rhs: Self) {
        for (count, other) in self.counts.iter_mut().zip(rhs.counts) {
            *count += other;
        }
    }
}

impl Add for CategoryCounts {
    type Output = CategoryCounts;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl Sum for CategoryCounts {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}
