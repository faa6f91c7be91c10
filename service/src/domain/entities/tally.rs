//! Per-category ticket tally
//!
//! Sums the request lines of one purchase order by category. Lives for a single
//! purchase call only.

use std::collections::HashMap;

use super::ticket::{TicketCategory, TicketTypeRequest};

/// Summed ticket counts per category for one purchase order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryTally {
    counts: HashMap<TicketCategory, i64>,
}

impl CategoryTally {
    /// Sum the counts of every request line by category
    pub fn from_requests(requests: &[TicketTypeRequest]) -> Self {
        let mut counts = HashMap::new();
        for request in requests {
            *counts.entry(request.category()).or_insert(0) += i64::from(request.count());
        }
        Self { counts }
    }

    /// Count for a category; 0 if no line mentioned it
    pub fn count(&self, category: TicketCategory) -> i64 {
        self.counts.get(&category).copied().unwrap_or(0)
    }

    pub fn adults(&self) -> i64 {
        self.count(TicketCategory::Adult)
    }

    pub fn children(&self) -> i64 {
        self.count(TicketCategory::Child)
    }

    pub fn infants(&self) -> i64 {
        self.count(TicketCategory::Infant)
    }

    /// Total tickets across all categories
    pub fn total(&self) -> i64 {
        self.counts.values().sum()
    }

    /// Seats needed: infants sit on an adult's lap
    pub fn seats(&self) -> i64 {
        self.counts
            .iter()
            .filter(|(category, _)| category.takes_seat())
            .map(|(_, count)| count)
            .sum()
    }

    pub fn has_negative_count(&self) -> bool {
        self.counts.values().any(|count| *count < 0)
    }

    /// Iterate over the categories that appeared in the order
    pub fn iter(&self) -> impl Iterator<Item = (TicketCategory, i64)> + '_ {
        self.counts.iter().map(|(category, count)| (*category, *count))
    }
}
