//! The collaborators the controller drives. Hosts implement these on top of the
//! actual map widget, geolocation provider, storage and DOM.

use std::fmt;

use workout_tracker_lib::{Coords, Workout, WorkoutId};

use crate::StorageError;

#[derive(Debug, Clone, PartialEq)]
pub struct TileLayer {
    pub url_template: String,
    pub attribution: String,
}

/// Popup attached to a workout marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Popup {
    pub content: String,
    pub class_name: String,
    pub auto_close: bool,
    pub close_on_click: bool,
}

impl Popup {
    /// Popups stay open until closed explicitly, so every workout stays labelled.
    pub fn for_workout(workout: &Workout) -> Self {
        Self {
            content: workout.popup_label(),
            class_name: format!("{}-popup", workout.kind()),
            auto_close: false,
            close_on_click: false,
        }
    }
}

pub trait MapService {
    /// Handle to a marker placed on the map.
    type Marker;

    /// Shows the map centered on `center`. The host reports back through
    /// `SyncController::on_map_ready` once the map can take markers.
    fn load_view(&mut self, center: Coords, zoom: f64, tiles: &TileLayer);

    /// Starts forwarding clicks on the map to `SyncController::on_map_clicked`.
    fn listen_for_clicks(&mut self);

    fn set_view(&mut self, center: Coords, zoom: f64, animate: bool);

    fn create_marker(&mut self, coords: Coords, popup: &Popup) -> Self::Marker;

    fn remove_marker(&mut self, marker: Self::Marker);
}

#[derive(Debug, Clone, PartialEq)]
pub enum LocationError {
    PermissionDenied,
    PositionUnavailable,
    Timeout,
    /// The platform has no geolocation provider at all.
    Unsupported,
    Other(String),
}

impl fmt::Display for LocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationError::PermissionDenied => write!(f, "Could not get your position: permission denied"),
            LocationError::PositionUnavailable => write!(f, "Could not get your position: position unavailable"),
            LocationError::Timeout => write!(f, "Could not get your position: request timed out"),
            LocationError::Unsupported => write!(f, "Geolocation is not supported by this browser"),
            LocationError::Other(message) => write!(f, "Could not get your position: {message}"),
        }
    }
}

/// One-shot position lookup. The result is delivered through
/// `SyncController::on_location_ready` or `SyncController::on_location_failed`.
pub trait GeolocationService {
    fn request_current_position(&mut self);
}

/// Durable key-value storage holding serialized blobs.
pub trait WorkoutStorage {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, blob: &str) -> Result<(), StorageError>;
}

/// Where a click inside a list entry landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListTarget {
    Entry,
    Edit,
    Delete,
}

pub trait WorkoutView {
    /// Called once stored workouts are shown. Inputs stay inert until then.
    fn enable_inputs(&mut self);

    /// Inserts an entry at the top of the list.
    fn render_workout(&mut self, workout: &Workout);

    fn remove_workout(&mut self, id: WorkoutId);

    fn clear_workouts(&mut self);

    fn show_form(&mut self);

    fn hide_form(&mut self);

    /// Empties every input field.
    fn reset_form(&mut self);

    fn focus_distance(&mut self);

    /// Swaps the cadence and elevation inputs.
    fn toggle_extra_field(&mut self);

    fn show_error(&mut self, error: &LocationError);
}
