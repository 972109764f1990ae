use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::types::{DebtorId, DebtorStatus, PaymentId};

/// all events emitted while working a debtor ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    DebtorRegistered {
        debtor_id: DebtorId,
        name: String,
        principal: Money,
        start_date: NaiveDate,
        timestamp: DateTime<Utc>,
    },
    PaymentRecorded {
        debtor_id: DebtorId,
        payment_id: PaymentId,
        amount: Money,
        date: NaiveDate,
        timestamp: DateTime<Utc>,
    },
    PaymentRemoved {
        debtor_id: DebtorId,
        payment_id: PaymentId,
        amount: Money,
        timestamp: DateTime<Utc>,
    },
    StatusChanged {
        debtor_id: DebtorId,
        old_status: DebtorStatus,
        new_status: DebtorStatus,
        reason: String,
        timestamp: DateTime<Utc>,
    },
}

/// event store for collecting events during operations
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
