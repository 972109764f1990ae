use thiserror::Error;

use crate::decimal::{Money, Rate};
use crate::types::{DebtorId, DebtorStatus, PaymentId};

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("invalid principal: {amount}")]
    InvalidPrincipal { amount: Money },

    #[error("invalid daily rate: {rate}")]
    InvalidDailyRate { rate: Rate },

    #[error("invalid payment amount: {amount}")]
    InvalidPaymentAmount { amount: Money },

    #[error("debtor not found: {id}")]
    DebtorNotFound { id: DebtorId },

    #[error("payment not found: {id}")]
    PaymentNotFound { id: PaymentId },

    #[error("only settled status is supported, got {requested:?}")]
    UnsupportedStatusTarget { requested: DebtorStatus },
}

pub type Result<T> = std::result::Result<T, LedgerError>;
