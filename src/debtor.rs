use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::types::{DebtorId, DebtorStatus, PaymentId};

/// immutable inputs to the snapshot calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebtorFacts {
    pub principal: Money,
    pub daily_rate: Rate,
    pub start_date: NaiveDate,
}

/// debtor record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debtor {
    pub id: DebtorId,
    pub name: String,
    /// informational only, interest math anchors on start_date
    pub incurred_date: NaiveDate,
    pub principal: Money,
    pub daily_rate: Rate,
    pub start_date: NaiveDate,
    pub status: DebtorStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Debtor {
    /// project the calculation inputs
    pub fn facts(&self) -> DebtorFacts {
        DebtorFacts {
            principal: self.principal,
            daily_rate: self.daily_rate,
            start_date: self.start_date,
        }
    }
}

/// input for registering a debtor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDebtor {
    pub name: String,
    pub incurred_date: NaiveDate,
    pub principal: Money,
    pub daily_rate: Rate,
    pub start_date: NaiveDate,
    /// defaults to Active when not supplied
    pub status: Option<DebtorStatus>,
}

/// a single payment, immutable once recorded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub id: PaymentId,
    pub amount: Money,
    pub date: NaiveDate,
    /// per-debtor insertion counter, tie-break for same-day payments
    pub sequence: u64,
    pub created_at: DateTime<Utc>,
}

impl Payment {
    /// the ledger processes payments ascending by this key
    pub fn ledger_key(&self) -> (NaiveDate, u64) {
        (self.date, self.sequence)
    }
}
