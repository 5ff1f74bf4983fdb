use gloo_console::{error, warn};
use gloo_utils::window;
use wasm_bindgen::{prelude::Closure, JsCast};
use web_sys::{GeolocationPosition, GeolocationPositionError, Storage};
use workout_tracker_lib::Coords;
use workout_tracker_sync::{
    services::{GeolocationService, LocationError, WorkoutStorage},
    StorageError,
};
use yew::Callback;

/// `navigator.geolocation`, reporting back through a component callback.
pub struct BrowserGeolocation {
    on_result: Callback<Result<Coords, LocationError>>,
}

impl BrowserGeolocation {
    pub fn new(on_result: Callback<Result<Coords, LocationError>>) -> Self {
        Self { on_result }
    }
}

impl GeolocationService for BrowserGeolocation {
    fn request_current_position(&mut self) {
        let Ok(geolocation) = window().navigator().geolocation() else {
            self.on_result.emit(Err(LocationError::Unsupported));
            return;
        };

        let on_found = self.on_result.clone();
        let on_success = Closure::once_into_js(move |position: GeolocationPosition| {
            let coords = position.coords();
            on_found.emit(Ok(Coords::new(coords.latitude(), coords.longitude())));
        });

        let on_failed = self.on_result.clone();
        let on_error = Closure::once_into_js(move |err: GeolocationPositionError| {
            on_failed.emit(Err(location_error(&err)));
        });

        if let Err(err) = geolocation.get_current_position_with_error_callback(on_success.unchecked_ref(), Some(on_error.unchecked_ref())) {
            self.on_result.emit(Err(LocationError::Other(format!("{err:?}"))));
        }
    }
}

fn location_error(err: &GeolocationPositionError) -> LocationError {
    match err.code() {
        GeolocationPositionError::PERMISSION_DENIED => LocationError::PermissionDenied,
        GeolocationPositionError::POSITION_UNAVAILABLE => LocationError::PositionUnavailable,
        GeolocationPositionError::TIMEOUT => LocationError::Timeout,
        _ => LocationError::Other(err.message()),
    }
}

/// `window.localStorage`. Without it (private mode, disabled storage) reads find
/// nothing and writes fail.
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    pub fn open() -> Self {
        let storage = window().local_storage().ok().flatten();
        if storage.is_none() {
            warn!("localStorage is not available, workouts will not be kept");
        }
        Self { storage }
    }
}

impl WorkoutStorage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        let storage = self.storage.as_ref()?;
        match storage.get_item(key) {
            Ok(blob) => blob,
            Err(err) => {
                error!(format!("Failed to read {key} from localStorage: {err:?}"));
                None
            }
        }
    }

    fn set(&mut self, key: &str, blob: &str) -> Result<(), StorageError> {
        let storage = self.storage.as_ref()
            .ok_or(StorageError::Write("localStorage is not available".to_string()))?;
        storage.set_item(key, blob)
            .map_err(|err| StorageError::Write(format!("Failed to write {key} to localStorage: {err:?}")))
    }
}
