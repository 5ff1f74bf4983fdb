//! Storage representation of workouts.
//!
//! Workouts are stored as a JSON array of flat objects. Derived values (`pace`,
//! `speed`) are stored alongside the inputs and reused on load. The format has no
//! version field, so reading is lenient: numbers written as strings are accepted,
//! `type` is accepted in place of `kind`, and a missing derived value is recomputed.

use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    coords::Coords,
    workout::{round_one_decimal, Metrics, Workout, WorkoutKind},
    workout_id::WorkoutId,
};

#[derive(Debug)]
pub enum RecordError {
    /// The blob as a whole could not be read.
    Malformed(String),
    /// A single entry could not be turned into a workout.
    InvalidRecord(String),
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutRecord {
    pub id: i64,
    #[serde(deserialize_with = "lenient_number")]
    pub distance: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub duration: f64,
    pub coords: Coords,
    #[serde(default)]
    pub date: String,
    #[serde(alias = "type")]
    pub kind: String,
    #[serde(default, deserialize_with = "lenient_optional_number", skip_serializing_if = "Option::is_none")]
    pub cadence: Option<f64>,
    #[serde(default, deserialize_with = "lenient_optional_number", skip_serializing_if = "Option::is_none")]
    pub pace: Option<f64>,
    #[serde(default, deserialize_with = "lenient_optional_number", skip_serializing_if = "Option::is_none")]
    pub elevation_gain: Option<f64>,
    #[serde(default, deserialize_with = "lenient_optional_number", skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
}

impl From<&Workout> for WorkoutRecord {
    fn from(workout: &Workout) -> Self {
        let (cadence, pace, elevation_gain, speed) = match workout.metrics {
            Metrics::Running { cadence, pace } => (Some(cadence), Some(pace), None, None),
            Metrics::Cycling { elevation_gain, speed } => (None, None, Some(elevation_gain), Some(speed)),
        };

        Self {
            id: workout.id.0,
            distance: workout.distance,
            duration: workout.duration,
            coords: workout.coords,
            date: workout.date.clone(),
            kind: workout.kind().as_str().to_string(),
            cadence,
            pace,
            elevation_gain,
            speed,
        }
    }
}

impl TryFrom<WorkoutRecord> for Workout {
    type Error = RecordError;

    fn try_from(record: WorkoutRecord) -> Result<Self, Self::Error> {
        let kind: WorkoutKind = record.kind.parse()
            .map_err(|_| RecordError::InvalidRecord(format!("Workout {} has unknown kind {:?}", record.id, record.kind)))?;

        if !(record.distance.is_finite() && record.distance > 0.) || !(record.duration.is_finite() && record.duration > 0.) {
            return Err(RecordError::InvalidRecord(format!("Workout {} has invalid distance or duration", record.id)));
        }

        let metrics = match kind {
            WorkoutKind::Running => {
                let cadence = record.cadence
                    .ok_or(RecordError::InvalidRecord(format!("Running workout {} has no cadence", record.id)))?;
                let pace = record.pace.unwrap_or_else(|| round_one_decimal(record.duration / record.distance));
                Metrics::Running { cadence, pace }
            }
            WorkoutKind::Cycling => {
                let elevation_gain = record.elevation_gain
                    .ok_or(RecordError::InvalidRecord(format!("Cycling workout {} has no elevation gain", record.id)))?;
                let speed = record.speed.unwrap_or_else(|| round_one_decimal(record.distance / (record.duration / 60.)));
                Metrics::Cycling { elevation_gain, speed }
            }
        };

        Ok(Workout {
            id: WorkoutId(record.id),
            distance: record.distance,
            duration: record.duration,
            coords: record.coords,
            date: record.date,
            metrics,
        })
    }
}

/// Serializes the full collection, in order.
pub fn encode_workouts<'a>(workouts: impl IntoIterator<Item = &'a Workout>) -> Result<String, RecordError> {
    let records: Vec<WorkoutRecord> = workouts.into_iter().map(WorkoutRecord::from).collect();
    serde_json::to_string(&records).map_err(|e| RecordError::Malformed(format!("Failed to serialize workouts: {e}")))
}

/// Workouts read back from storage, plus the entries that had to be skipped.
#[derive(Debug, Default)]
pub struct DecodedWorkouts {
    pub workouts: Vec<Workout>,
    pub skipped: Vec<RecordError>,
}

/// Reads a stored collection. Fails only when the blob is not a JSON array; bad
/// entries inside the array are skipped and reported.
pub fn decode_workouts(blob: &str) -> Result<DecodedWorkouts, RecordError> {
    let values: Vec<serde_json::Value> = serde_json::from_str(blob)
        .map_err(|e| RecordError::Malformed(format!("Stored workouts are not a JSON array: {e}")))?;

    let mut decoded = DecodedWorkouts::default();
    for value in values {
        let workout = serde_json::from_value::<WorkoutRecord>(value)
            .map_err(|e| RecordError::InvalidRecord(format!("Unreadable workout entry: {e}")))
            .and_then(Workout::try_from);

        match workout {
            Ok(workout) => decoded.workouts.push(workout),
            Err(err) => decoded.skipped.push(err),
        }
    }

    Ok(decoded)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LenientNumber {
    Number(f64),
    Text(String),
}

impl LenientNumber {
    fn into_f64<E: serde::de::Error>(self) -> Result<f64, E> {
        match self {
            LenientNumber::Number(n) => Ok(n),
            LenientNumber::Text(text) => text.trim().parse()
                .map_err(|_| E::custom(format!("expected a number, got {text:?}"))),
        }
    }
}

fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    LenientNumber::deserialize(deserializer)?.into_f64()
}

fn lenient_optional_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Option::<LenientNumber>::deserialize(deserializer)?
        .map(LenientNumber::into_f64)
        .transpose()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn sample() -> Vec<Workout> {
        let created = Utc.with_ymd_and_hms(2024, 10, 8, 9, 30, 0).unwrap();
        vec![
            Workout::new(WorkoutId(1_000), WorkoutKind::Running, 5., 30., Coords::new(12.9, 77.6), 178., &created),
            Workout::new(WorkoutId(2_000), WorkoutKind::Cycling, 20., 60., Coords::new(13.0, 77.5), -150., &created),
        ]
    }

    #[test]
    fn stored_field_names() {
        let blob = encode_workouts(&sample()).unwrap();
        let values: Vec<serde_json::Value> = serde_json::from_str(&blob).unwrap();

        assert_eq!(values[0]["kind"], "running");
        assert_eq!(values[0]["coords"], serde_json::json!([12.9, 77.6]));
        assert_eq!(values[0]["pace"], 6.0);
        assert_eq!(values[0]["cadence"], 178.0);
        assert!(values[0].get("speed").is_none());

        assert_eq!(values[1]["kind"], "cycling");
        assert_eq!(values[1]["elevationGain"], -150.0);
        assert_eq!(values[1]["speed"], 20.0);
        assert_eq!(values[1]["date"], "Oct 8");
        assert_eq!(values[1]["id"], 2_000);
    }

    #[test]
    fn reload_keeps_order_and_values() {
        let workouts = sample();
        let decoded = decode_workouts(&encode_workouts(&workouts).unwrap()).unwrap();

        assert!(decoded.skipped.is_empty());
        assert_eq!(decoded.workouts, workouts);
    }

    #[test]
    fn stored_derived_values_are_not_recomputed() {
        let blob = r#"[{"id":1,"distance":5,"duration":30,"coords":[1,2],"date":"Jan 1","kind":"running","cadence":170,"pace":9.9}]"#;
        let decoded = decode_workouts(blob).unwrap();
        assert_eq!(decoded.workouts[0].metrics, Metrics::Running { cadence: 170., pace: 9.9 });
    }

    #[test]
    fn legacy_entries_are_accepted() {
        let blob = r#"[{"id":7,"distance":"20","duration":"60","coords":[1,2],"date":"Jan 1","type":"cycling","elevationGain":"-5"}]"#;
        let decoded = decode_workouts(blob).unwrap();

        assert!(decoded.skipped.is_empty());
        assert_eq!(decoded.workouts[0].id, WorkoutId(7));
        assert_eq!(decoded.workouts[0].metrics, Metrics::Cycling { elevation_gain: -5., speed: 20.0 });
    }

    #[test]
    fn bad_entries_are_skipped() {
        let blob = r#"[
            {"id":1,"distance":5,"duration":30,"coords":[1,2],"date":"Jan 1","kind":"swimming","cadence":1},
            {"id":2,"distance":5,"duration":30,"coords":[1,2],"date":"Jan 1","kind":"running"},
            {"id":3,"distance":5},
            {"id":4,"distance":5,"duration":30,"coords":[1,2],"date":"Jan 1","kind":"running","cadence":170}
        ]"#;
        let decoded = decode_workouts(blob).unwrap();

        assert_eq!(decoded.skipped.len(), 3);
        assert_eq!(decoded.workouts.len(), 1);
        assert_eq!(decoded.workouts[0].id, WorkoutId(4));
    }

    #[test]
    fn non_array_blobs_are_malformed() {
        for blob in ["", "null", "{\"id\":1}", "[1,2", "not json"] {
            assert!(matches!(decode_workouts(blob), Err(RecordError::Malformed(_))), "{blob:?}");
        }
    }
}
