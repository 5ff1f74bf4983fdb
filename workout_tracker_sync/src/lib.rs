pub mod clock;
pub mod config;
mod controller;
pub mod services;
pub mod storage;
pub mod store;
pub mod validation;

pub use controller::*;

#[derive(Debug)]
pub enum StorageError {
    Encode(String),
    Write(String),
}

/// Why a submitted form did not produce a workout. Hosts are expected to ignore
/// these: a rejected form simply stays open.
#[derive(Debug, PartialEq)]
pub enum SubmitError {
    NotInitialized,
    InvalidInput(validation::ValidationError),
    PendingLocationMissing,
}

/// Installs a fmt subscriber for tests. Safe to call from every test.
#[cfg(test)]
pub(crate) fn init_test_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=trace", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}
