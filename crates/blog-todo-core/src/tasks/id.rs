//! Task Id Generation

use crate::domain::TaskId;

/// Source of fresh task ids
pub trait IdGenerator {
    fn next_id(&mut self) -> TaskId;
}

/// Millisecond wall-clock ids, strictly increasing within a session
#[derive(Debug, Default)]
pub struct ClockIdGenerator {
    last: i64,
}

impl ClockIdGenerator {
    fn advance(&mut self, now_ms: i64) -> TaskId {
        self.last = if now_ms > self.last { now_ms } else { self.last + 1 };
        self.last.to_string()
    }
}

impl IdGenerator for ClockIdGenerator {
    fn next_id(&mut self) -> TaskId {
        self.advance(chrono::Utc::now().timestamp_millis())
    }
}

/// Deterministic ids "1", "2", ... for tests and fixtures
#[derive(Debug)]
pub struct SequentialIdGenerator {
    next: u64,
}

impl SequentialIdGenerator {
    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> TaskId {
        let id = self.next;
        self.next += 1;
        id.to_string()
    }
}
