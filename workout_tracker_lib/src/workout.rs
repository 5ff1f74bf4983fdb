use std::{fmt, str::FromStr};

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::{coords::Coords, workout_id::WorkoutId};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutKind {
    Running,
    Cycling,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownWorkoutKind(pub String);

impl WorkoutKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "running",
            WorkoutKind::Cycling => "cycling",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::Cycling => "Cycling",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "🏃‍♂️",
            WorkoutKind::Cycling => "🚴‍♀️",
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutKind {
    type Err = UnknownWorkoutKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "running" => Ok(WorkoutKind::Running),
            "cycling" => Ok(WorkoutKind::Cycling),
            other => Err(UnknownWorkoutKind(other.to_string())),
        }
    }
}

/// The kind-specific input of a workout together with the metric derived from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Metrics {
    /// `pace` in min/km.
    Running { cadence: f64, pace: f64 },
    /// `speed` in km/h. Elevation may be negative on a net descent.
    Cycling { elevation_gain: f64, speed: f64 },
}

impl Metrics {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            Metrics::Running { .. } => WorkoutKind::Running,
            Metrics::Cycling { .. } => WorkoutKind::Cycling,
        }
    }
}

/// Computes pace or speed for a workout. `extra` is the cadence for running and the
/// elevation gain for cycling. Derived values are rounded to one decimal.
pub fn derive_metrics(kind: WorkoutKind, distance: f64, duration: f64, extra: f64) -> Metrics {
    match kind {
        WorkoutKind::Running => Metrics::Running {
            cadence: extra,
            pace: round_one_decimal(duration / distance),
        },
        WorkoutKind::Cycling => Metrics::Cycling {
            elevation_gain: extra,
            speed: round_one_decimal(distance / (duration / 60.)),
        },
    }
}

pub(crate) fn round_one_decimal(value: f64) -> f64 {
    (value * 10.).round() / 10.
}

/// Formats the short creation label shown on markers and list entries, e.g. `Oct 18`.
pub fn date_label<Tz: TimeZone>(created: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    created.format("%b %-d").to_string()
}

/// One value shown in a list entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Stat {
    pub icon: &'static str,
    pub value: f64,
    pub unit: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    pub id: WorkoutId,
    /// Kilometers.
    pub distance: f64,
    /// Minutes.
    pub duration: f64,
    pub coords: Coords,
    pub date: String,
    pub metrics: Metrics,
}

impl Workout {
    /// Builds a workout from validated input. Pace or speed is computed here and
    /// never again.
    pub fn new<Tz: TimeZone>(
        id: WorkoutId,
        kind: WorkoutKind,
        distance: f64,
        duration: f64,
        coords: Coords,
        extra: f64,
        created: &DateTime<Tz>,
    ) -> Self
    where
        Tz::Offset: fmt::Display,
    {
        Self {
            id,
            distance,
            duration,
            coords,
            date: date_label(created),
            metrics: derive_metrics(kind, distance, duration, extra),
        }
    }

    pub fn kind(&self) -> WorkoutKind {
        self.metrics.kind()
    }

    /// "Running on Oct 18"
    pub fn title(&self) -> String {
        format!("{} on {}", self.kind().label(), self.date)
    }

    pub fn popup_label(&self) -> String {
        format!("{} {}", self.kind().icon(), self.title())
    }

    pub fn stats(&self) -> [Stat; 4] {
        let distance = Stat { icon: "🛣️", value: self.distance, unit: "km" };
        let duration = Stat { icon: "⏱", value: self.duration, unit: "min" };

        match self.metrics {
            Metrics::Running { cadence, pace } => [
                distance,
                duration,
                Stat { icon: "⚡️", value: pace, unit: "min/km" },
                Stat { icon: "🦶🏼", value: cadence, unit: "spm" },
            ],
            Metrics::Cycling { elevation_gain, speed } => [
                distance,
                duration,
                Stat { icon: "⚡️", value: speed, unit: "km/h" },
                Stat { icon: "⛰", value: elevation_gain, unit: "m" },
            ],
        }
    }
}
