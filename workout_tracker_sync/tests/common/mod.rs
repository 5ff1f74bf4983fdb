#![allow(dead_code)]

use chrono::{FixedOffset, TimeZone};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use workout_tracker_lib::{Coords, Workout, WorkoutId};
use workout_tracker_sync::{
    SyncController,
    clock::FixedClock,
    services::{GeolocationService, LocationError, MapService, Popup, TileLayer, WorkoutStorage, WorkoutView},
    storage::MemoryStorage,
    StorageError,
};

pub type TestController<S> = SyncController<RecordingMap, ScriptedGeolocation, S, RecordingView, FixedClock>;

pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "workout_tracker_sync=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}

pub fn clock() -> FixedClock {
    let offset = FixedOffset::east_opt(0).unwrap();
    FixedClock(offset.with_ymd_and_hms(2024, 10, 8, 9, 30, 0).unwrap())
}

pub fn controller_with<S: WorkoutStorage>(storage: S) -> TestController<S> {
    init_tracing();
    SyncController::with_clock(RecordingMap::default(), ScriptedGeolocation::default(), storage, RecordingView::default(), clock())
}

pub fn controller() -> TestController<MemoryStorage> {
    controller_with(MemoryStorage::new())
}

/// Controller that is initialized and has a map.
pub fn ready_controller_with<S: WorkoutStorage>(storage: S) -> TestController<S> {
    let mut controller = controller_with(storage);
    controller.initialize();
    controller.on_location_ready(Coords::new(12.97, 77.59));
    controller.on_map_ready();
    controller
}

pub fn ready_controller() -> TestController<MemoryStorage> {
    ready_controller_with(MemoryStorage::new())
}

#[derive(Debug, Clone, PartialEq)]
pub struct TestMarker {
    pub id: u32,
    pub coords: Coords,
    pub popup: Popup,
}

#[derive(Debug, Default)]
pub struct RecordingMap {
    pub loaded: Vec<(Coords, f64, TileLayer)>,
    pub listening: bool,
    pub views: Vec<(Coords, f64, bool)>,
    pub on_map: Vec<TestMarker>,
    pub removed: Vec<u32>,
    next_id: u32,
}

impl MapService for RecordingMap {
    type Marker = TestMarker;

    fn load_view(&mut self, center: Coords, zoom: f64, tiles: &TileLayer) {
        self.loaded.push((center, zoom, tiles.clone()));
    }

    fn listen_for_clicks(&mut self) {
        self.listening = true;
    }

    fn set_view(&mut self, center: Coords, zoom: f64, animate: bool) {
        self.views.push((center, zoom, animate));
    }

    fn create_marker(&mut self, coords: Coords, popup: &Popup) -> TestMarker {
        self.next_id += 1;
        let marker = TestMarker { id: self.next_id, coords, popup: popup.clone() };
        self.on_map.push(marker.clone());
        marker
    }

    fn remove_marker(&mut self, marker: TestMarker) {
        self.on_map.retain(|m| m.id != marker.id);
        self.removed.push(marker.id);
    }
}

#[derive(Debug, Default)]
pub struct ScriptedGeolocation {
    pub requests: u32,
}

impl GeolocationService for ScriptedGeolocation {
    fn request_current_position(&mut self) {
        self.requests += 1;
    }
}

/// Mirrors what a list on screen would show, top entry first.
#[derive(Debug, Default)]
pub struct RecordingView {
    pub inputs_enabled: bool,
    pub entries: Vec<Workout>,
    pub form_visible: bool,
    pub form_resets: u32,
    pub focus_requests: u32,
    pub showing_elevation: bool,
    pub errors: Vec<LocationError>,
}

impl RecordingView {
    pub fn entry_ids(&self) -> Vec<WorkoutId> {
        self.entries.iter().map(|w| w.id).collect()
    }
}

impl WorkoutView for RecordingView {
    fn enable_inputs(&mut self) {
        self.inputs_enabled = true;
    }

    fn render_workout(&mut self, workout: &Workout) {
        self.entries.insert(0, workout.clone());
    }

    fn remove_workout(&mut self, id: WorkoutId) {
        self.entries.retain(|w| w.id != id);
    }

    fn clear_workouts(&mut self) {
        self.entries.clear();
    }

    fn show_form(&mut self) {
        self.form_visible = true;
    }

    fn hide_form(&mut self) {
        self.form_visible = false;
    }

    fn reset_form(&mut self) {
        self.form_resets += 1;
    }

    fn focus_distance(&mut self) {
        self.focus_requests += 1;
    }

    fn toggle_extra_field(&mut self) {
        self.showing_elevation = !self.showing_elevation;
    }

    fn show_error(&mut self, error: &LocationError) {
        self.errors.push(error.clone());
    }
}

/// Reads like memory storage but refuses every write.
#[derive(Debug, Default)]
pub struct ReadOnlyStorage {
    pub inner: MemoryStorage,
    pub failed_writes: u32,
}

impl WorkoutStorage for ReadOnlyStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, _blob: &str) -> Result<(), StorageError> {
        self.failed_writes += 1;
        Err(StorageError::Write(format!("Storage is read-only, cannot write {key}")))
    }
}

pub fn stored_ids(storage: &impl WorkoutStorage) -> Vec<i64> {
    let blob = storage.get("workouts").expect("nothing stored");
    let values: Vec<serde_json::Value> = serde_json::from_str(&blob).unwrap();
    values.iter().map(|v| v["id"].as_i64().unwrap()).collect()
}
