//! No-op gateway adapters
//!
//! Log-only implementations of the payment and seat reservation ports, for
//! hosts that have not wired up the real gateways yet.

pub mod payment;
pub mod reservation;

pub use payment::NoopPaymentService;
pub use reservation::NoopSeatReservationService;
