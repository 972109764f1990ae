use crate::decimal::Money;
use crate::types::DebtorStatus;

use super::DebtSnapshot;

/// decide the status a debtor should carry given a fresh snapshot.
///
/// Pure two-way toggle on the sign of the total debt: zero debt settles any
/// non-settled debtor, outstanding debt reopens a settled one. A dispute
/// with debt outstanding is operator-owned and left alone. Persisting the
/// returned status is the caller's job.
pub fn sync_status(current: DebtorStatus, snapshot: &DebtSnapshot) -> DebtorStatus {
    if snapshot.total_debt <= Money::ZERO && current != DebtorStatus::Settled {
        DebtorStatus::Settled
    } else if snapshot.total_debt > Money::ZERO && current == DebtorStatus::Settled {
        DebtorStatus::Active
    } else {
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Money;

    fn snapshot_with_total(total: &str) -> DebtSnapshot {
        let total = Money::from_str_exact(total).unwrap();
        DebtSnapshot {
            principal_remaining: total,
            interest_accrued: Money::ZERO,
            interest_paid: Money::ZERO,
            interest_remaining: Money::ZERO,
            total_debt: total,
        }
    }

    #[test]
    fn test_zero_debt_settles_active_debtor() {
        let snapshot = snapshot_with_total("0.00");
        assert_eq!(
            sync_status(DebtorStatus::Active, &snapshot),
            DebtorStatus::Settled
        );
    }

    #[test]
    fn test_outstanding_debt_reopens_settled_debtor() {
        let snapshot = snapshot_with_total("1010.00");
        assert_eq!(
            sync_status(DebtorStatus::Settled, &snapshot),
            DebtorStatus::Active
        );
    }

    #[test]
    fn test_active_with_debt_is_unchanged() {
        let snapshot = snapshot_with_total("42.00");
        assert_eq!(
            sync_status(DebtorStatus::Active, &snapshot),
            DebtorStatus::Active
        );
    }

    #[test]
    fn test_dispute_settles_on_zero_debt_but_holds_otherwise() {
        // zero debt settles any non-settled debtor, disputes included
        assert_eq!(
            sync_status(DebtorStatus::InDispute, &snapshot_with_total("0.00")),
            DebtorStatus::Settled
        );
        // a dispute with outstanding debt is operator-owned, never touched
        assert_eq!(
            sync_status(DebtorStatus::InDispute, &snapshot_with_total("10.00")),
            DebtorStatus::InDispute
        );
    }

    #[test]
    fn test_sync_is_idempotent() {
        let settled = snapshot_with_total("0.00");
        let first = sync_status(DebtorStatus::Active, &settled);
        assert_eq!(sync_status(first, &settled), first);

        let open = snapshot_with_total("99.00");
        let reopened = sync_status(DebtorStatus::Settled, &open);
        assert_eq!(sync_status(reopened, &open), reopened);
    }
}
