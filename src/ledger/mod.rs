pub mod snapshot;
pub mod status;

pub use snapshot::{compute_snapshot, DebtSnapshot};
pub use status::sync_status;
