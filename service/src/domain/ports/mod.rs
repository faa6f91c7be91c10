//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod payment;
pub mod reservation;

pub use payment::TicketPaymentService;
pub use reservation::SeatReservationService;

#[cfg(test)]
pub use payment::MockTicketPaymentService;
#[cfg(test)]
pub use reservation::MockSeatReservationService;
