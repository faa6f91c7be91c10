//! Purchase outcome and receipt

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::account::AccountId;

/// Unique identifier for a committed purchase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PurchaseId(pub Uuid);

impl PurchaseId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PurchaseId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PurchaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What an admissible order costs and how many seats it needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PurchaseOutcome {
    pub amount: u64,
    pub seats: u32,
}

/// Returned once both gateways have been called
#[derive(Debug, Clone, Serialize)]
pub struct PurchaseReceipt {
    pub id: PurchaseId,
    pub account_id: AccountId,
    pub outcome: PurchaseOutcome,
    pub placed_at: DateTime<Utc>,
}
