use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::debtor::{DebtorFacts, Payment};
use crate::decimal::Money;

/// point-in-time view of a debtor's balances, recomputed on demand and
/// never stored as source of truth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtSnapshot {
    pub principal_remaining: Money,
    pub interest_accrued: Money,
    pub interest_paid: Money,
    pub interest_remaining: Money,
    pub total_debt: Money,
}

impl DebtSnapshot {
    pub fn is_settled(&self) -> bool {
        self.total_debt <= Money::ZERO
    }
}

/// fold the payment history into a snapshot as of `as_of`.
///
/// `payments` must already be sorted ascending by `(date, sequence)`;
/// `DebtorAccount` maintains that order on insert. Payments dated after
/// `as_of` terminate the scan. Accumulators stay unrounded across the
/// whole walk, quantization to 2 places happens once at the end.
pub fn compute_snapshot(
    facts: &DebtorFacts,
    payments: &[Payment],
    as_of: NaiveDate,
) -> DebtSnapshot {
    let daily_rate = facts.daily_rate.as_decimal();

    let mut principal_remaining = facts.principal.as_decimal();
    let mut interest_accrued = Decimal::ZERO;
    let mut interest_paid = Decimal::ZERO;
    let mut cursor = facts.start_date;

    for payment in payments {
        if payment.date > as_of {
            break;
        }

        let days = days_between(cursor, payment.date);
        if days > 0 && principal_remaining > Decimal::ZERO {
            interest_accrued += principal_remaining * daily_rate * Decimal::from(days);
        }

        let interest_outstanding = (interest_accrued - interest_paid).max(Decimal::ZERO);
        let amount = payment.amount.as_decimal();
        let to_interest = amount.min(interest_outstanding);
        interest_paid += to_interest;

        let remainder = amount - to_interest;
        if remainder > Decimal::ZERO {
            // surplus beyond the principal is absorbed, never credited
            principal_remaining = (principal_remaining - remainder).max(Decimal::ZERO);
        }

        // moves backward for payments dated before the cursor, clamping
        // above discards the negative interval instead of erroring
        cursor = payment.date;
    }

    let tail_days = days_between(cursor, as_of);
    if tail_days > 0 && principal_remaining > Decimal::ZERO {
        interest_accrued += principal_remaining * daily_rate * Decimal::from(tail_days);
    }

    let interest_remaining = (interest_accrued - interest_paid).max(Decimal::ZERO);
    let total_debt = principal_remaining + interest_remaining;

    DebtSnapshot {
        principal_remaining: Money::from_decimal(principal_remaining),
        interest_accrued: Money::from_decimal(interest_accrued),
        interest_paid: Money::from_decimal(interest_paid),
        interest_remaining: Money::from_decimal(interest_remaining),
        total_debt: Money::from_decimal(total_debt),
    }
}

/// whole calendar days between dates, never negative
fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days().max(0)
}
