//! In-process, append-only log of answered questions.
//!
//! Volatile by design: lifetime is the process lifetime, there is no
//! eviction and no persistence. The log is an owned, injectable component
//! (not a global) so tests construct fresh isolated instances.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};

/// One stored question/answer/context triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub question: String,
    pub answer: String,
    pub context: Option<String>,
}

/// Ordered append-only store of [`QuestionRecord`]s.
///
/// Insertion order is retrieval order. Appends and reads are guarded by a
/// plain mutex; the lock is never held across an await point, so the std
/// mutex is the right tool here.
#[derive(Debug, Default)]
pub struct QuestionLog {
    records: Mutex<Vec<QuestionRecord>>,
}

impl QuestionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one record at the end of the log.
    pub fn append(&self, record: QuestionRecord) {
        // Lock poisoning only happens if a panic occurred while holding the
        // lock; the vec push cannot panic mid-write, so recover the data.
        let mut records = self.records.lock().unwrap_or_else(|e| e.into_inner());
        records.push(record);
    }

    /// Returns a snapshot of the full log contents, in insertion order.
    ///
    /// The snapshot does not reflect appends made after it was taken.
    pub fn snapshot(&self) -> Vec<QuestionRecord> {
        let records = self.records.lock().unwrap_or_else(|e| e.into_inner());
        records.clone()
    }
}
