use std::env;

use crate::app::purchase_rules::{ADULT_TICKET_PRICE, CHILD_TICKET_PRICE, MAX_TICKETS_PER_PURCHASE};
use crate::error::ConfigError;

/// Limits and prices applied to every purchase order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseConfig {
    pub max_tickets_per_purchase: u32,
    pub adult_price: u64,
    pub child_price: u64,
}

impl Default for PurchaseConfig {
    fn default() -> Self {
        Self {
            max_tickets_per_purchase: MAX_TICKETS_PER_PURCHASE,
            adult_price: ADULT_TICKET_PRICE,
            child_price: CHILD_TICKET_PRICE,
        }
    }
}

impl PurchaseConfig {
    /// Load from the environment (and `.env` if present), falling back to defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            max_tickets_per_purchase: parse_or(
                &lookup,
                "TICKETS_MAX_PER_PURCHASE",
                defaults.max_tickets_per_purchase,
            )?,
            adult_price: parse_or(&lookup, "TICKETS_ADULT_PRICE", defaults.adult_price)?,
            child_price: parse_or(&lookup, "TICKETS_CHILD_PRICE", defaults.child_price)?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}
