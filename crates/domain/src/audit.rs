use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A discrete, timestamped record of a security-relevant action.
///
/// Events are created by producers and consumed read-only by streams. The
/// identifier may be empty for event kinds that are never referenced
/// individually.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    /// Stable event identifier, possibly empty.
    pub id: String,
    /// Stable event type tag.
    pub event_type: String,
    /// Time the recorded action happened.
    pub time: DateTime<Utc>,
    /// Monotonically increasing sequence number within a stream.
    pub index: i64,
}

impl AuditEvent {
    /// Creates an event of the given type stamped with the current time.
    #[must_use]
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            event_type: event_type.into(),
            time: Utc::now(),
            index: 0,
        }
    }

    /// Sets the stable event identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the in-stream sequence number.
    #[must_use]
    pub fn with_index(mut self, index: i64) -> Self {
        self.index = index;
        self
    }
}

/// Upload progress snapshot published by streams with an async pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamStatus {
    /// Identifier of the upload backing the stream.
    pub upload_id: String,
    /// Index of the last event accepted by the upload.
    pub last_event_index: i64,
    /// Time of the last successful upload flush.
    pub last_upload_time: DateTime<Utc>,
}
