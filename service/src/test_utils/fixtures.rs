//! Test fixtures
//!
//! Factory functions for request lines and accounts.

use crate::domain::entities::{AccountId, TicketCategory, TicketTypeRequest};

/// Account used by tests that do not care which account pays
pub fn test_account() -> AccountId {
    account(1001)
}

pub fn account(id: i64) -> AccountId {
    AccountId::try_from(id).expect("fixture account ids are positive")
}

pub fn adult(count: i32) -> TicketTypeRequest {
    TicketTypeRequest::new(TicketCategory::Adult, count)
}

pub fn child(count: i32) -> TicketTypeRequest {
    TicketTypeRequest::new(TicketCategory::Child, count)
}

pub fn infant(count: i32) -> TicketTypeRequest {
    TicketTypeRequest::new(TicketCategory::Infant, count)
}
