//! Purchase rules
//!
//! Business limits and prices for ticket orders, and the checks that decide
//! whether a tallied order is admissible.

use crate::config::PurchaseConfig;
use crate::domain::entities::{CategoryTally, PurchaseOutcome, TicketCategory};
use crate::error::{InvalidPurchase, InvalidPurchaseReason};

/// Maximum number of tickets in a single purchase order
pub const MAX_TICKETS_PER_PURCHASE: u32 = 25;

/// Price of an adult ticket
pub const ADULT_TICKET_PRICE: u64 = 25;

/// Price of a child ticket
pub const CHILD_TICKET_PRICE: u64 = 15;

/// Infants sit on an adult's lap and travel free
pub const INFANT_TICKET_PRICE: u64 = 0;

/// Check a tallied order against the business rules.
///
/// Rules are checked in a fixed order and the first failure is returned:
/// 1. Total tickets within the per-purchase maximum
/// 2. Child or infant tickets need at least one adult ticket
/// 3. No more infants than adults
/// 4. No negative counts
pub fn validate(tally: &CategoryTally, max_tickets: u32) -> Result<(), InvalidPurchase> {
    if tally.total() > i64::from(max_tickets) {
        return Err(InvalidPurchaseReason::MaxTicketsExceeded.into());
    }

    let adults = tally.adults();
    if (tally.children() > 0 || tally.infants() > 0) && adults == 0 {
        return Err(InvalidPurchaseReason::ChildOrInfantWithoutAdult.into());
    }

    if tally.infants() > adults {
        return Err(InvalidPurchaseReason::InfantsExceedAdults.into());
    }

    // Only reachable when a caller passes negative request counts
    if tally.has_negative_count() {
        return Err(InvalidPurchaseReason::InvalidTicketCount.into());
    }

    Ok(())
}

/// Unit price of a ticket category
pub fn unit_price(category: TicketCategory, config: &PurchaseConfig) -> u64 {
    match category {
        TicketCategory::Adult => config.adult_price,
        TicketCategory::Child => config.child_price,
        TicketCategory::Infant => INFANT_TICKET_PRICE,
    }
}

/// Price and seat-count a tally that has already passed `validate`
pub fn price(
    tally: &CategoryTally,
    config: &PurchaseConfig,
) -> Result<PurchaseOutcome, InvalidPurchase> {
    let mut amount: u64 = 0;
    for (category, count) in tally.iter() {
        let count =
            u64::try_from(count).map_err(|_| InvalidPurchaseReason::InvalidTicketCount)?;
        amount = amount.saturating_add(unit_price(category, config).saturating_mul(count));
    }

    let seats =
        u32::try_from(tally.seats()).map_err(|_| InvalidPurchaseReason::InvalidTicketCount)?;

    Ok(PurchaseOutcome { amount, seats })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::TicketTypeRequest;
    use crate::test_utils::{adult, child, infant};

    fn check(requests: &[TicketTypeRequest]) -> Result<(), InvalidPurchaseReason> {
        validate(
            &CategoryTally::from_requests(requests),
            MAX_TICKETS_PER_PURCHASE,
        )
        .map_err(|e| e.reason())
    }

    #[test]
    fn constants_are_as_advertised() {
        assert_eq!(MAX_TICKETS_PER_PURCHASE, 25);
        assert_eq!(ADULT_TICKET_PRICE, 25);
        assert_eq!(CHILD_TICKET_PRICE, 15);
        assert_eq!(INFANT_TICKET_PRICE, 0);
    }

    #[test]
    fn accepts_exactly_the_maximum() {
        assert_eq!(check(&[adult(25)]), Ok(()));
        assert_eq!(check(&[adult(20), child(3), infant(2)]), Ok(()));
    }

    #[test]
    fn rejects_one_over_the_maximum() {
        assert_eq!(
            check(&[adult(26)]),
            Err(InvalidPurchaseReason::MaxTicketsExceeded)
        );
        assert_eq!(
            check(&[adult(20), child(5), infant(1)]),
            Err(InvalidPurchaseReason::MaxTicketsExceeded)
        );
    }

    #[test]
    fn infants_count_towards_the_maximum() {
        assert_eq!(
            check(&[adult(13), infant(13)]),
            Err(InvalidPurchaseReason::MaxTicketsExceeded)
        );
    }

    #[test]
    fn rejects_child_or_infant_without_adult() {
        assert_eq!(
            check(&[child(1)]),
            Err(InvalidPurchaseReason::ChildOrInfantWithoutAdult)
        );
        assert_eq!(
            check(&[infant(1)]),
            Err(InvalidPurchaseReason::ChildOrInfantWithoutAdult)
        );
        assert_eq!(
            check(&[adult(0), child(2)]),
            Err(InvalidPurchaseReason::ChildOrInfantWithoutAdult)
        );
    }

    #[test]
    fn rejects_more_infants_than_adults() {
        assert_eq!(
            check(&[adult(1), infant(2)]),
            Err(InvalidPurchaseReason::InfantsExceedAdults)
        );
        assert_eq!(check(&[adult(2), infant(2)]), Ok(()));
    }

    #[test]
    fn rejects_negative_counts() {
        assert_eq!(
            check(&[adult(2), child(-1)]),
            Err(InvalidPurchaseReason::InvalidTicketCount)
        );
        assert_eq!(
            check(&[adult(30), child(-10)]),
            Err(InvalidPurchaseReason::InvalidTicketCount)
        );
    }

    #[test]
    fn first_failing_rule_wins() {
        // Over the maximum and without an adult: maximum is reported
        assert_eq!(
            check(&[child(30)]),
            Err(InvalidPurchaseReason::MaxTicketsExceeded)
        );
        // No adult and more infants than adults: missing adult is reported
        assert_eq!(
            check(&[infant(3)]),
            Err(InvalidPurchaseReason::ChildOrInfantWithoutAdult)
        );
        // More infants than adults and a negative count: infants are reported
        assert_eq!(
            check(&[adult(1), infant(2), child(-1)]),
            Err(InvalidPurchaseReason::InfantsExceedAdults)
        );
    }

    #[test]
    fn respects_a_configured_maximum() {
        let tally = CategoryTally::from_requests(&[adult(5)]);
        assert!(validate(&tally, 5).is_ok());
        assert_eq!(
            validate(&tally, 4).unwrap_err().reason(),
            InvalidPurchaseReason::MaxTicketsExceeded
        );
    }

    #[test]
    fn prices_adults_and_children() {
        let config = PurchaseConfig::default();
        let tally = CategoryTally::from_requests(&[adult(2), child(3), infant(1)]);

        let outcome = price(&tally, &config).unwrap();

        assert_eq!(outcome.amount, 2 * 25 + 3 * 15);
        assert_eq!(outcome.seats, 5);
    }

    #[test]
    fn infants_are_free_and_seatless() {
        let config = PurchaseConfig::default();
        let tally = CategoryTally::from_requests(&[adult(2), infant(2)]);

        let outcome = price(&tally, &config).unwrap();

        assert_eq!(outcome, PurchaseOutcome { amount: 50, seats: 2 });
    }

    #[test]
    fn uses_configured_prices() {
        let config = PurchaseConfig {
            adult_price: 40,
            child_price: 10,
            ..PurchaseConfig::default()
        };
        let tally = CategoryTally::from_requests(&[adult(1), child(1)]);

        assert_eq!(price(&tally, &config).unwrap().amount, 50);
        assert_eq!(unit_price(TicketCategory::Infant, &config), 0);
    }
}
