//! Injected capabilities: transaction ids and wall-clock time.

use chrono::{Local, NaiveDateTime};
use uuid::Uuid;

/// Produces a unique id for each call.
pub trait TransactionIdGenerator: Send + Sync {
    /// Returns a fresh, unique id.
    fn next_id(&self) -> String;
}

/// Random v4 UUID transaction ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidTransactionIds;

impl TransactionIdGenerator for UuidTransactionIds {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Source of the current time, used for default submission times.
pub trait Clock: Send + Sync {
    /// Returns the current local wall-clock time.
    fn now(&self) -> NaiveDateTime;
}

/// The system's local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
