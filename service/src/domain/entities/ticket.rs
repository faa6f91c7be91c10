//! Ticket domain entities
//!
//! The closed set of ticket categories and the request line a customer submits.

use serde::{Deserialize, Serialize};

/// Ticket category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketCategory {
    Adult,
    Child,
    Infant,
}

impl TicketCategory {
    pub const ALL: [TicketCategory; 3] = [
        TicketCategory::Adult,
        TicketCategory::Child,
        TicketCategory::Infant,
    ];

    /// Whether a ticket of this category occupies a seat
    pub fn takes_seat(&self) -> bool {
        !matches!(self, TicketCategory::Infant)
    }
}

impl std::fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TicketCategory::Adult => write!(f, "ADULT"),
            TicketCategory::Child => write!(f, "CHILD"),
            TicketCategory::Infant => write!(f, "INFANT"),
        }
    }
}

impl std::str::FromStr for TicketCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ADULT" => Ok(TicketCategory::Adult),
            "CHILD" => Ok(TicketCategory::Child),
            "INFANT" => Ok(TicketCategory::Infant),
            _ => Err(format!("Unknown ticket category: {}", s)),
        }
    }
}

/// One line of a purchase order: a category and how many tickets of it
///
/// Built by the caller. The count is taken as given; the service rejects
/// orders whose summed counts go negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketTypeRequest {
    category: TicketCategory,
    count: i32,
}

impl TicketTypeRequest {
    pub fn new(category: TicketCategory, count: i32) -> Self {
        Self { category, count }
    }

    pub fn category(&self) -> TicketCategory {
        self.category
    }

    pub fn count(&self) -> i32 {
        self.count
    }
}
