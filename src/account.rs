use chrono::NaiveDate;
use hourglass_rs::SafeTimeProvider;
use uuid::Uuid;

use crate::debtor::{Debtor, NewDebtor, Payment};
use crate::decimal::Money;
use crate::errors::{LedgerError, Result};
use crate::events::{Event, EventStore};
use crate::ledger::{compute_snapshot, sync_status, DebtSnapshot};
use crate::types::{DebtorStatus, PaymentId};
use crate::views::{DebtorDetails, DebtorSummary, PaymentView};

/// a debtor record plus its payment ledger and event stream
#[derive(Debug)]
pub struct DebtorAccount {
    pub record: Debtor,
    payments: Vec<Payment>,
    next_sequence: u64,
    pub events: EventStore,
}

impl DebtorAccount {
    /// open an account for a new debtor
    pub fn open(new: NewDebtor, time_provider: &SafeTimeProvider) -> Result<Self> {
        if new.principal.is_negative() {
            return Err(LedgerError::InvalidPrincipal {
                amount: new.principal,
            });
        }
        if new.daily_rate.is_negative() {
            return Err(LedgerError::InvalidDailyRate {
                rate: new.daily_rate,
            });
        }

        let now = time_provider.now();
        let record = Debtor {
            id: Uuid::new_v4(),
            name: new.name,
            incurred_date: new.incurred_date,
            principal: new.principal,
            daily_rate: new.daily_rate,
            start_date: new.start_date,
            status: new.status.unwrap_or(DebtorStatus::Active),
            created_at: now,
            updated_at: now,
        };

        let mut account = Self {
            record,
            payments: Vec::new(),
            next_sequence: 0,
            events: EventStore::new(),
        };

        account.events.emit(Event::DebtorRegistered {
            debtor_id: account.record.id,
            name: account.record.name.clone(),
            principal: account.record.principal,
            start_date: account.record.start_date,
            timestamp: now,
        });

        Ok(account)
    }

    /// payments in ledger order, ascending by (date, sequence)
    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    /// record a payment, keeping the ledger order invariant
    pub fn add_payment(
        &mut self,
        amount: Money,
        date: NaiveDate,
        time_provider: &SafeTimeProvider,
    ) -> Result<PaymentId> {
        if amount <= Money::ZERO {
            return Err(LedgerError::InvalidPaymentAmount { amount });
        }

        let now = time_provider.now();
        let payment = Payment {
            id: Uuid::new_v4(),
            amount,
            date,
            sequence: self.next_sequence,
            created_at: now,
        };
        self.next_sequence += 1;

        let payment_id = payment.id;
        let key = payment.ledger_key();
        let at = self.payments.partition_point(|p| p.ledger_key() <= key);
        self.payments.insert(at, payment);

        self.record.updated_at = now;
        self.events.emit(Event::PaymentRecorded {
            debtor_id: self.record.id,
            payment_id,
            amount,
            date,
            timestamp: now,
        });

        Ok(payment_id)
    }

    /// drop a payment from the ledger
    pub fn remove_payment(
        &mut self,
        payment_id: PaymentId,
        time_provider: &SafeTimeProvider,
    ) -> Result<Payment> {
        let at = self
            .payments
            .iter()
            .position(|p| p.id == payment_id)
            .ok_or(LedgerError::PaymentNotFound { id: payment_id })?;
        let payment = self.payments.remove(at);

        let now = time_provider.now();
        self.record.updated_at = now;
        self.events.emit(Event::PaymentRemoved {
            debtor_id: self.record.id,
            payment_id,
            amount: payment.amount,
            timestamp: now,
        });

        Ok(payment)
    }

    /// compute the snapshot as of an explicit date
    pub fn snapshot_as_of(&self, as_of: NaiveDate) -> DebtSnapshot {
        compute_snapshot(&self.record.facts(), &self.payments, as_of)
    }

    /// compute the snapshot as of today
    pub fn snapshot(&self, time_provider: &SafeTimeProvider) -> DebtSnapshot {
        self.snapshot_as_of(time_provider.now().date_naive())
    }

    /// reconcile the persisted status with a fresh snapshot
    pub fn sync_status(&mut self, time_provider: &SafeTimeProvider) -> DebtorStatus {
        let snapshot = self.snapshot(time_provider);
        let next = sync_status(self.record.status, &snapshot);
        if next != self.record.status {
            self.transition(next, "ledger sync", time_provider);
        }
        next
    }

    /// the explicit close action, no ledger sync involved
    pub fn mark_settled(&mut self, time_provider: &SafeTimeProvider) {
        if self.record.status != DebtorStatus::Settled {
            self.transition(DebtorStatus::Settled, "closed by operator", time_provider);
        }
    }

    fn transition(
        &mut self,
        new_status: DebtorStatus,
        reason: &str,
        time_provider: &SafeTimeProvider,
    ) {
        let now = time_provider.now();
        let old_status = self.record.status;
        self.record.status = new_status;
        self.record.updated_at = now;
        self.events.emit(Event::StatusChanged {
            debtor_id: self.record.id,
            old_status,
            new_status,
            reason: reason.to_string(),
            timestamp: now,
        });
    }

    /// list-row view with the dues from a fresh snapshot
    pub fn summary(&self, time_provider: &SafeTimeProvider) -> DebtorSummary {
        let snapshot = self.snapshot(time_provider);
        DebtorSummary {
            id: self.record.id,
            name: self.record.name.clone(),
            incurred_date: self.record.incurred_date,
            principal: self.record.principal,
            daily_rate: self.record.daily_rate,
            start_date: self.record.start_date,
            status: self.record.status,
            interest_due: snapshot.interest_remaining,
            total_due: snapshot.total_debt,
        }
    }

    /// detail view: summary plus the raw ledger and the full breakdown
    pub fn details(&self, time_provider: &SafeTimeProvider) -> DebtorDetails {
        let snapshot = self.snapshot(time_provider);
        // newest first on the wire
        let payments = self
            .payments
            .iter()
            .rev()
            .map(|p| PaymentView {
                id: p.id,
                amount: p.amount,
                date: p.date,
            })
            .collect();

        DebtorDetails {
            summary: self.summary(time_provider),
            payments,
            snapshot,
        }
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        self.events.take_events()
    }
}
