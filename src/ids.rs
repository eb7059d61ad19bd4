//! Identifier sources injected into the store.

use crate::error::KanbanError;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Produces ids for newly created boards, lists and cards
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

impl IdGenerator for Box<dyn IdGenerator + Send> {
    fn next_id(&mut self) -> String {
        (**self).next_id()
    }
}

/// Deterministic counter ids (e.g., id1, id2, id3)
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: u64,
}

impl SequentialIdGenerator {
    const DEFAULT_PREFIX: &'static str = "id";

    pub fn new() -> Self {
        Self::with_prefix(Self::DEFAULT_PREFIX)
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> String {
        let id = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

/// Random v4 UUID ids
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Millisecond timestamp ids.
///
/// Strictly increasing: when the clock has not moved past the last issued
/// value, the next value is `last + 1`.
#[derive(Debug, Clone, Default)]
pub struct TimestampIdGenerator {
    last: i64,
}

impl TimestampIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_value(&mut self, now_millis: i64) -> i64 {
        let value = if now_millis > self.last {
            now_millis
        } else {
            self.last + 1
        };
        self.last = value;
        value
    }
}

impl IdGenerator for TimestampIdGenerator {
    fn next_id(&mut self) -> String {
        let now = Utc::now().timestamp_millis();
        self.next_value(now).to_string()
    }
}

/// Which generator a configured store uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    Sequential,
    #[default]
    Uuid,
    Timestamp,
}

impl IdStrategy {
    pub fn build(self) -> Box<dyn IdGenerator + Send> {
        match self {
            Self::Sequential => Box::new(SequentialIdGenerator::new()),
            Self::Uuid => Box::new(UuidIdGenerator),
            Self::Timestamp => Box::new(TimestampIdGenerator::new()),
        }
    }
}

impl FromStr for IdStrategy {
    type Err = KanbanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sequential" => Ok(Self::Sequential),
            "uuid" => Ok(Self::Uuid),
            "timestamp" => Ok(Self::Timestamp),
            _ => Err(KanbanError::InvalidIdStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequential => write!(f, "sequential"),
            Self::Uuid => write!(f, "uuid"),
            Self::Timestamp => write!(f, "timestamp"),
        }
    }
}
