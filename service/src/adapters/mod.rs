//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod noop;

pub use noop::{NoopPaymentService, NoopSeatReservationService};
