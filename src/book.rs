use chrono::NaiveDate;
use hourglass_rs::SafeTimeProvider;

use crate::account::DebtorAccount;
use crate::debtor::{Debtor, NewDebtor};
use crate::decimal::Money;
use crate::errors::{LedgerError, Result};
use crate::types::{DebtorId, DebtorStatus, PaymentId};
use crate::views::{DebtorDetails, DebtorSummary};

/// in-memory registry of debtor accounts.
///
/// Reproduces the call pattern of the surrounding CRUD layer: every read
/// path reconciles status against a fresh snapshot before serializing, so
/// the status a caller sees always reflects the ledger at read time.
#[derive(Default)]
pub struct DebtorBook {
    accounts: Vec<DebtorAccount>,
}

impl DebtorBook {
    pub fn new() -> Self {
        Self {
            accounts: Vec::new(),
        }
    }

    /// register a debtor, reconcile, and return the detail view
    pub fn register(
        &mut self,
        new: NewDebtor,
        time_provider: &SafeTimeProvider,
    ) -> Result<DebtorDetails> {
        let mut account = DebtorAccount::open(new, time_provider)?;
        account.sync_status(time_provider);
        let details = account.details(time_provider);
        self.accounts.push(account);
        Ok(details)
    }

    /// summaries for every debtor, newest registration first
    pub fn list(&mut self, time_provider: &SafeTimeProvider) -> Vec<DebtorSummary> {
        for account in &mut self.accounts {
            account.sync_status(time_provider);
        }
        self.accounts
            .iter()
            .rev()
            .map(|account| account.summary(time_provider))
            .collect()
    }

    /// reconcile one debtor and return the detail view
    pub fn details(
        &mut self,
        id: DebtorId,
        time_provider: &SafeTimeProvider,
    ) -> Result<DebtorDetails> {
        let account = self.account_mut(id)?;
        account.sync_status(time_provider);
        Ok(account.details(time_provider))
    }

    /// record a payment against a debtor
    pub fn add_payment(
        &mut self,
        id: DebtorId,
        amount: Money,
        date: NaiveDate,
        time_provider: &SafeTimeProvider,
    ) -> Result<DebtorDetails> {
        let account = self.account_mut(id)?;
        account.add_payment(amount, date, time_provider)?;
        account.sync_status(time_provider);
        Ok(account.details(time_provider))
    }

    /// drop a payment from a debtor's ledger
    pub fn remove_payment(
        &mut self,
        id: DebtorId,
        payment_id: PaymentId,
        time_provider: &SafeTimeProvider,
    ) -> Result<DebtorDetails> {
        let account = self.account_mut(id)?;
        account.remove_payment(payment_id, time_provider)?;
        account.sync_status(time_provider);
        Ok(account.details(time_provider))
    }

    /// remove a debtor and its whole ledger
    pub fn remove_debtor(&mut self, id: DebtorId) -> Result<Debtor> {
        let at = self
            .accounts
            .iter()
            .position(|a| a.record.id == id)
            .ok_or(LedgerError::DebtorNotFound { id })?;
        Ok(self.accounts.remove(at).record)
    }

    /// close a debtor. Only a requested status of Settled is accepted;
    /// other transitions stay operator-explicit elsewhere.
    pub fn close(
        &mut self,
        id: DebtorId,
        requested: DebtorStatus,
        time_provider: &SafeTimeProvider,
    ) -> Result<DebtorDetails> {
        if requested != DebtorStatus::Settled {
            return Err(LedgerError::UnsupportedStatusTarget { requested });
        }
        let account = self.account_mut(id)?;
        account.mark_settled(time_provider);
        Ok(account.details(time_provider))
    }

    pub fn account(&self, id: DebtorId) -> Result<&DebtorAccount> {
        self.accounts
            .iter()
            .find(|a| a.record.id == id)
            .ok_or(LedgerError::DebtorNotFound { id })
    }

    fn account_mut(&mut self, id: DebtorId) -> Result<&mut DebtorAccount> {
        self.accounts
            .iter_mut()
            .find(|a| a.record.id == id)
            .ok_or(LedgerError::DebtorNotFound { id })
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
