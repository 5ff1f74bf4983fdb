use std::fmt;

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

/// Identifies a workout for the lifetime of the stored collection.
/// Derived from the creation time in milliseconds.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct WorkoutId(pub i64);

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out strictly increasing ids.
///
/// Ids follow the wall clock in milliseconds, but two workouts created within the
/// same millisecond (or after the clock stepped backwards) still get distinct ids.
#[derive(Debug, Default, Clone)]
pub struct WorkoutIdGenerator {
    last: Option<i64>,
}

impl WorkoutIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes sure every future id is greater than `id`. Used after loading stored workouts.
    pub fn observe(&mut self, id: WorkoutId) {
        if self.last.map_or(true, |last| id.0 > last) {
            self.last = Some(id.0);
        }
    }

    pub fn next_id<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) -> WorkoutId {
        let millis = now.timestamp_millis();
        let id = match self.last {
            Some(last) if millis <= last => last + 1,
            _ => millis,
        };
        self.last = Some(id);
        WorkoutId(id)
    }
}
