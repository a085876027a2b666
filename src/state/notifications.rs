//! Recently raised notifications, kept for status queries

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::Notification;

/// How many notifications the log keeps
pub const NOTIFICATION_LOG_CAPACITY: usize = 20;

/// A notification together with when it fired
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationRecord {
    pub kind: Notification,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl NotificationRecord {
    pub fn new(kind: Notification) -> Self {
        Self {
            kind,
            message: kind.message().to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Bounded log, oldest entries dropped first
#[derive(Debug, Clone)]
pub struct NotificationLog {
    records: VecDeque<NotificationRecord>,
    capacity: usize,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::with_capacity(NOTIFICATION_LOG_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a record; a zero-capacity log keeps nothing
    pub fn push(&mut self, kind: Notification) {
        if self.capacity == 0 {
            return;
        }
        if self.records.len() == self.capacity {
            self.records.pop_front();
        }
        self.records.push_back(NotificationRecord::new(kind));
    }

    /// Records from oldest to newest
    pub fn records(&self) -> Vec<NotificationRecord> {
        self.records.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for NotificationLog {
    fn default() -> Self {
        Self::new()
    }
}
