//! serializable views matching the external JSON contract

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::ledger::DebtSnapshot;
use crate::types::{DebtorId, DebtorStatus, PaymentId};

/// list-row view of a debtor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtorSummary {
    pub id: DebtorId,
    pub name: String,
    pub incurred_date: NaiveDate,
    pub principal: Money,
    pub daily_rate: Rate,
    pub start_date: NaiveDate,
    pub status: DebtorStatus,
    pub interest_due: Money,
    pub total_due: Money,
}

/// detail view: the summary plus the raw ledger and the snapshot breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtorDetails {
    #[serde(flatten)]
    pub summary: DebtorSummary,
    /// newest first
    pub payments: Vec<PaymentView>,
    pub snapshot: DebtSnapshot,
}

/// wire shape of a single payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentView {
    pub id: PaymentId,
    pub amount: Money,
    pub date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn summary() -> DebtorSummary {
        DebtorSummary {
            id: Uuid::nil(),
            name: "Alpha".to_string(),
            incurred_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            principal: Money::from_str_exact("1000.00").unwrap(),
            daily_rate: Rate::from_str_exact("0.001").unwrap(),
            start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            status: DebtorStatus::Active,
            interest_due: Money::from_str_exact("10.00").unwrap(),
            total_due: Money::from_str_exact("1010.00").unwrap(),
        }
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let json = serde_json::to_value(summary()).unwrap();

        assert_eq!(json["name"], "Alpha");
        assert_eq!(json["incurredDate"], "2026-01-01");
        assert_eq!(json["principal"], "1000.00");
        assert_eq!(json["dailyRate"], "0.001000");
        assert_eq!(json["startDate"], "2026-01-01");
        assert_eq!(json["status"], "active");
        assert_eq!(json["interestDue"], "10.00");
        assert_eq!(json["totalDue"], "1010.00");
    }

    #[test]
    fn test_details_flatten_summary_next_to_ledger() {
        let details = DebtorDetails {
            summary: summary(),
            payments: vec![PaymentView {
                id: Uuid::nil(),
                amount: Money::from_str_exact("20.00").unwrap(),
                date: NaiveDate::from_ymd_opt(2026, 1, 11).unwrap(),
            }],
            snapshot: DebtSnapshot {
                principal_remaining: Money::from_str_exact("990.00").unwrap(),
                interest_accrued: Money::from_str_exact("10.00").unwrap(),
                interest_paid: Money::from_str_exact("10.00").unwrap(),
                interest_remaining: Money::ZERO,
                total_debt: Money::from_str_exact("990.00").unwrap(),
            },
        };

        let json = serde_json::to_value(&details).unwrap();
        // summary fields flatten to the top level
        assert_eq!(json["name"], "Alpha");
        assert_eq!(json["payments"][0]["amount"], "20.00");
        assert_eq!(json["snapshot"]["principalRemaining"], "990.00");
        assert_eq!(json["snapshot"]["totalDebt"], "990.00");
    }
}
