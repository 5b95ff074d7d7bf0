//! Identifier and clock sources
//!
//! The identity manager never calls `Uuid::new_v4` or `Utc::now` directly.
//! Both go through these traits so a store can be driven deterministically.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Source of fresh document identifiers
pub trait IdGenerator: Send {
    /// Produce a new candidate identifier
    fn next_id(&mut self) -> String;
}

/// Random 128-bit identifiers (UUID v4, hyphenated)
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Hands out a fixed list of ids in order, then falls back to UUID v4.
///
/// Used to force collisions in tests.
#[derive(Debug, Default, Clone)]
pub struct SequenceGenerator {
    queued: VecDeque<String>,
}

impl SequenceGenerator {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            queued: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Ids not yet handed out
    pub fn remaining(&self) -> usize {
        self.queued.len()
    }
}

impl IdGenerator for SequenceGenerator {
    fn next_id(&mut self) -> String {
        self.queued
            .pop_front()
            .unwrap_or_else(|| Uuid::new_v4().to_string())
    }
}

/// Wall-clock source for default creation timestamps
pub trait Clock: Send {
    fn now(&self) -> DateTime<Utc>;
}

/// `Utc::now()`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
