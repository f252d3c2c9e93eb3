//! Global transfer log
//!
//! This module provides the TransferLog component that records every
//! successful transfer the ledger completes. It is separate from the
//! per-account histories: an account only sees its own debit or credit,
//! while the log sees the transfer as a single event.
//!
//! The log is a FIFO queue, but entries are never consumed. It only grows.

use crate::types::TransferRecord;
use std::collections::VecDeque;

/// Append-only queue of completed transfers
#[derive(Debug, Default)]
pub struct TransferLog {
    records: VecDeque<TransferRecord>,
}

impl TransferLog {
    pub fn new() -> Self {
        TransferLog {
            records: VecDeque::new(),
        }
    }

    /// Append a completed transfer to the back of the queue
    pub fn record(&mut self, record: TransferRecord) {
        self.records.push_back(record);
    }

    /// All records, oldest first
    pub fn records(&self) -> &VecDeque<TransferRecord> {
        &self.records
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
