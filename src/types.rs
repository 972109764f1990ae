use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// unique identifier for a debtor
pub type DebtorId = Uuid;

/// unique identifier for a payment
pub type PaymentId = Uuid;

/// debtor status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebtorStatus {
    /// debt outstanding, ledger keeps accruing
    Active,
    /// frozen by an operator, ledger sync leaves it alone
    InDispute,
    /// total outstanding debt is zero or less
    Settled,
}

impl DebtorStatus {
    pub fn is_settled(&self) -> bool {
        matches!(self, DebtorStatus::Settled)
    }

    pub fn is_disputed(&self) -> bool {
        matches!(self, DebtorStatus::InDispute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&DebtorStatus::Active).unwrap(),
            "\"active\""
        );
        assert_eq!(
            serde_json::to_string(&DebtorStatus::InDispute).unwrap(),
            "\"in_dispute\""
        );
        assert_eq!(
            serde_json::to_string(&DebtorStatus::Settled).unwrap(),
            "\"settled\""
        );
    }

    #[test]
    fn test_status_roundtrip() {
        let s: DebtorStatus = serde_json::from_str("\"in_dispute\"").unwrap();
        assert!(s.is_disputed());
        assert!(!s.is_settled());
    }
}
