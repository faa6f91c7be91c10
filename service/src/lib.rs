//! Ticket Service
//!
//! Validates and prices ticket purchase orders, then takes payment and reserves
//! seats through two external gateways.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.
//!
//! ```
//! use std::sync::Arc;
//! use ticket_service::{
//!     NoopPaymentService, NoopSeatReservationService, TicketCategory, TicketService,
//!     TicketTypeRequest,
//! };
//!
//! # fn main() -> Result<(), ticket_service::PurchaseError> {
//! let service = TicketService::new(
//!     Arc::new(NoopPaymentService),
//!     Arc::new(NoopSeatReservationService),
//! );
//! let receipt = service.purchase_tickets(
//!     42,
//!     &[
//!         TicketTypeRequest::new(TicketCategory::Adult, 2),
//!         TicketTypeRequest::new(TicketCategory::Infant, 1),
//!     ],
//! )?;
//! assert_eq!(receipt.outcome.amount, 50);
//! assert_eq!(receipt.outcome.seats, 2);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod telemetry;

#[cfg(test)]
mod test_utils;


pub use adapters::{NoopPaymentService, NoopSeatReservationService};
pub use app::TicketService;
pub use config::PurchaseConfig;
pub use domain::entities::{
    AccountId, CategoryTally, PurchaseId, PurchaseOutcome, PurchaseReceipt, TicketCategory,
    TicketTypeRequest,
};
pub use domain::ports::{SeatReservationService, TicketPaymentService};
pub use error::{
    ConfigError, InvalidPurchase, InvalidPurchaseReason, PaymentError, PurchaseError,
    ReservationError,
};
