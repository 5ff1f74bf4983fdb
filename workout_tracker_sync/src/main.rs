use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use workout_tracker_sync::{
    config::WORKOUTS_KEY,
    storage::{load_workouts, save_workouts, FileStorage},
};

// CLI for inspecting and clearing the workouts kept under the data directory
fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=trace", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut storage = match FileStorage::open_default() {
        Ok(storage) => storage,
        Err(err) => {
            tracing::error!("Failed to open storage: {err:?}");
            return;
        }
    };

    match std::env::args().nth(1).as_deref() {
        None | Some("list") => {
            for workout in load_workouts(&storage, WORKOUTS_KEY) {
                let stats: Vec<String> = workout.stats().iter()
                    .map(|stat| format!("{} {} {}", stat.icon, stat.value, stat.unit))
                    .collect();
                println!("{} {}: {}", workout.id, workout.title(), stats.join(", "));
            }
        }
        Some("clear") => {
            match save_workouts(&mut storage, WORKOUTS_KEY, std::iter::empty()) {
                Ok(()) => tracing::info!("Cleared stored workouts"),
                Err(err) => tracing::error!("Failed to clear workouts: {err:?}"),
            }
        }
        Some(other) => tracing::error!("Unknown command {other:?}, expected `list` or `clear`"),
    }
}
