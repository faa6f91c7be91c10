//! Domain entities
//!
//! Core business objects for one purchase order.

pub mod account;
pub mod purchase;
pub mod tally;
pub mod ticket;

pub use account::AccountId;
pub use purchase::{PurchaseId, PurchaseOutcome, PurchaseReceipt};
pub use tally::CategoryTally;
pub use ticket::{TicketCategory, TicketTypeRequest};
