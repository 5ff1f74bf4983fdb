use const_format::concatcp;

use crate::services::TileLayer;

pub const DATA_DIR: &str = "data/";
pub const STORAGE_DIR: &str = concatcp!(DATA_DIR, "storage");

/// Key of the stored workout collection.
pub const WORKOUTS_KEY: &str = "workouts";

pub const TILE_URL_TEMPLATE: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

pub const INITIAL_ZOOM: f64 = 15.;
pub const NAVIGATION_ZOOM: f64 = 15.;

#[derive(Debug, Clone, PartialEq)]
pub struct SyncConfig {
    pub storage_key: String,
    /// Zoom used when the map is first centered on the user.
    pub initial_zoom: f64,
    /// Zoom used when jumping to a workout from the list.
    pub navigation_zoom: f64,
    pub tiles: TileLayer,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            storage_key: WORKOUTS_KEY.to_string(),
            initial_zoom: INITIAL_ZOOM,
            navigation_zoom: NAVIGATION_ZOOM,
            tiles: TileLayer {
                url_template: TILE_URL_TEMPLATE.to_string(),
                attribution: TILE_ATTRIBUTION.to_string(),
            },
        }
    }
}
