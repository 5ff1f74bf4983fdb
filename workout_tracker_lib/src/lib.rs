pub mod coords;
pub mod record;
pub mod workout;
pub mod workout_id;

pub use coords::Coords;
pub use workout::{derive_metrics, Metrics, Workout, WorkoutKind};
pub use workout_id::{WorkoutId, WorkoutIdGenerator};
