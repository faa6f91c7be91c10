//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod purchase_rules;
pub mod ticket_service;

// Re-export rule constants for public API (used by consumers and config defaults)
pub use purchase_rules::{
    ADULT_TICKET_PRICE, CHILD_TICKET_PRICE, INFANT_TICKET_PRICE, MAX_TICKETS_PER_PURCHASE,
};
pub use ticket_service::TicketService;
