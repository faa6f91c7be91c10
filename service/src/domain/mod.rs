//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models for a purchase order
//! - `ports`: Trait definitions for the payment and seat reservation gateways

pub mod entities;
pub mod ports;
