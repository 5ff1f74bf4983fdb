use workout_tracker_lib::{derive_metrics, Metrics, WorkoutKind};

/// Raw values of a submitted form. `extra` holds the cadence for running and the
/// elevation gain for cycling.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutForm {
    pub kind: WorkoutKind,
    pub distance: String,
    pub duration: String,
    pub extra: String,
}

impl WorkoutForm {
    pub fn new(kind: WorkoutKind, distance: impl Into<String>, duration: impl Into<String>, extra: impl Into<String>) -> Self {
        Self {
            kind,
            distance: distance.into(),
            duration: duration.into(),
            extra: extra.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Distance,
    Duration,
    Cadence,
    Elevation,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Empty, unparsable, infinite or NaN.
    NotANumber(Field),
    NotPositive(Field),
    /// Valid on its own but gives an infinite pace or speed.
    OutOfRange(Field),
}

/// Form values that passed validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkoutInput {
    pub kind: WorkoutKind,
    pub distance: f64,
    pub duration: f64,
    pub extra: f64,
}

/// Every field must be a finite number, and distance, duration and cadence must be
/// strictly positive. Elevation may be zero or negative. The derived pace or speed
/// must be finite too. A single failing field rejects the form.
pub fn validate(form: &WorkoutForm) -> Result<WorkoutInput, ValidationError> {
    let extra_field = match form.kind {
        WorkoutKind::Running => Field::Cadence,
        WorkoutKind::Cycling => Field::Elevation,
    };

    let distance = parse_finite(&form.distance, Field::Distance)?;
    let duration = parse_finite(&form.duration, Field::Duration)?;
    let extra = parse_finite(&form.extra, extra_field)?;

    require_positive(distance, Field::Distance)?;
    require_positive(duration, Field::Duration)?;
    if form.kind == WorkoutKind::Running {
        require_positive(extra, Field::Cadence)?;
    }

    match derive_metrics(form.kind, distance, duration, extra) {
        Metrics::Running { pace, .. } if !pace.is_finite() => return Err(ValidationError::OutOfRange(Field::Distance)),
        Metrics::Cycling { speed, .. } if !speed.is_finite() => return Err(ValidationError::OutOfRange(Field::Duration)),
        _ => {}
    }

    Ok(WorkoutInput {
        kind: form.kind,
        distance,
        duration,
        extra,
    })
}

fn parse_finite(raw: &str, field: Field) -> Result<f64, ValidationError> {
    raw.trim().parse::<f64>().ok()
        .filter(|value| value.is_finite())
        .ok_or(ValidationError::NotANumber(field))
}

fn require_positive(value: f64, field: Field) -> Result<(), ValidationError> {
    if value > 0. {
        Ok(())
    } else {
        Err(ValidationError::NotPositive(field))
    }
}
