pub mod account;
pub mod book;
pub mod debtor;
pub mod decimal;
pub mod errors;
pub mod events;
pub mod ledger;
pub mod types;
pub mod views;

// re-export key types
pub use account::DebtorAccount;
pub use book::DebtorBook;
pub use debtor::{Debtor, DebtorFacts, NewDebtor, Payment};
pub use decimal::{Money, Rate};
pub use errors::{LedgerError, Result};
pub use events::{Event, EventStore};
pub use ledger::{compute_snapshot, sync_status, DebtSnapshot};
pub use types::{DebtorId, DebtorStatus, PaymentId};
pub use views::{DebtorDetails, DebtorSummary, PaymentView};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
