use workout_tracker_lib::{Coords, Workout, WorkoutId, WorkoutIdGenerator};

use crate::{
    clock::{Clock, SystemClock},
    config::SyncConfig,
    services::{GeolocationService, ListTarget, LocationError, MapService, Popup, WorkoutStorage, WorkoutView},
    storage::{load_workouts, save_workouts},
    store::WorkoutStore,
    validation::{validate, WorkoutForm},
    SubmitError,
};

/// Owns the workouts and their markers and handles every event that changes them.
///
/// The host forwards events (geolocation results, map readiness, clicks, form
/// submissions) to the `on_*` methods. Each call runs to completion and leaves the
/// store, the map, the view and storage consistent with each other.
pub struct SyncController<M: MapService, G, S, V, C = SystemClock> {
    config: SyncConfig,
    map: M,
    geolocation: G,
    storage: S,
    view: V,
    clock: C,
    store: WorkoutStore<M::Marker>,
    ids: WorkoutIdGenerator,
    pending_location: Option<Coords>,
    initialized: bool,
    map_requested: bool,
    map_ready: bool,
}

impl<M, G, S, V> SyncController<M, G, S, V, SystemClock>
where
    M: MapService,
    G: GeolocationService,
    S: WorkoutStorage,
    V: WorkoutView,
{
    pub fn new(map: M, geolocation: G, storage: S, view: V) -> Self {
        Self::with_clock(map, geolocation, storage, view, SystemClock)
    }
}

impl<M, G, S, V, C> SyncController<M, G, S, V, C>
where
    M: MapService,
    G: GeolocationService,
    S: WorkoutStorage,
    V: WorkoutView,
    C: Clock,
{
    pub fn with_clock(map: M, geolocation: G, storage: S, view: V, clock: C) -> Self {
        Self {
            config: SyncConfig::default(),
            map,
            geolocation,
            storage,
            view,
            clock,
            store: WorkoutStore::new(),
            ids: WorkoutIdGenerator::new(),
            pending_location: None,
            initialized: false,
            map_requested: false,
            map_ready: false,
        }
    }

    pub fn with_config(mut self, config: SyncConfig) -> Self {
        self.config = config;
        self
    }

    /// Loads stored workouts into the list and asks for the user's position.
    /// Markers for the loaded workouts are created once the map is ready.
    pub fn initialize(&mut self) {
        if self.initialized {
            tracing::trace!("Already initialized");
            return;
        }

        let workouts = load_workouts(&self.storage, &self.config.storage_key);
        tracing::debug!("Loaded {} stored workouts", workouts.len());

        for workout in &workouts {
            self.ids.observe(workout.id);
            self.view.render_workout(workout);
        }
        self.store = WorkoutStore::from_workouts(workouts);

        self.view.enable_inputs();
        self.initialized = true;

        self.geolocation.request_current_position();
    }

    pub fn on_location_ready(&mut self, coords: Coords) {
        if self.map_requested {
            tracing::trace!("Map already requested, ignoring position {coords:?}");
            return;
        }

        tracing::debug!("Position found at {coords:?}, loading map");
        self.map_requested = true;
        self.map.load_view(coords, self.config.initial_zoom, &self.config.tiles);
    }

    /// Without a position there is no map. The list keeps working, minus the map.
    pub fn on_location_failed(&mut self, error: LocationError) {
        tracing::warn!("Geolocation failed: {error:?}");
        self.view.show_error(&error);
    }

    pub fn on_map_ready(&mut self) {
        if self.map_ready {
            return;
        }

        self.map_ready = true;
        self.map.listen_for_clicks();

        let map = &mut self.map;
        let created = self.store.attach_missing_markers(|workout| {
            map.create_marker(workout.coords, &Popup::for_workout(workout))
        });
        tracing::debug!("Map ready, placed {created} markers");
    }

    /// Remembers where the next workout goes. A newer click replaces an older one.
    pub fn on_map_clicked(&mut self, coords: Coords) {
        self.pending_location = Some(coords);
        self.view.show_form();
        self.view.focus_distance();
    }

    pub fn on_type_changed(&mut self) {
        self.view.toggle_extra_field();
    }

    /// Validates the form and, if it is complete, records a workout at the last
    /// clicked location. On error nothing changes and the form stays open.
    pub fn on_form_submitted(&mut self, form: &WorkoutForm) -> Result<WorkoutId, SubmitError> {
        if !self.initialized {
            return Err(SubmitError::NotInitialized);
        }

        let input = validate(form).map_err(|err| {
            tracing::trace!("Rejected form: {err:?}");
            SubmitError::InvalidInput(err)
        })?;

        let coords = self.pending_location.ok_or(SubmitError::PendingLocationMissing)?;

        let now = self.clock.now();
        let id = self.ids.next_id(&now);
        let workout = Workout::new(id, input.kind, input.distance, input.duration, coords, input.extra, &now);

        let marker = self.map_ready
            .then(|| self.map.create_marker(workout.coords, &Popup::for_workout(&workout)));

        self.store.push(workout, marker);
        self.pending_location = None;

        self.persist();

        if let Some(entry) = self.store.entries().last() {
            self.view.render_workout(&entry.workout);
        }
        self.view.reset_form();
        self.view.hide_form();

        tracing::debug!("Added workout {id}");
        Ok(id)
    }

    /// Centers the map on the clicked workout and deletes it if the delete button
    /// was hit. Editing is not supported.
    pub fn on_list_clicked(&mut self, id: WorkoutId, target: ListTarget) {
        let Some(workout) = self.store.get(id) else {
            tracing::trace!("No workout with id {id}");
            return;
        };

        if self.map_ready {
            self.map.set_view(workout.coords, self.config.navigation_zoom, true);
        }

        match target {
            ListTarget::Entry => {}
            ListTarget::Edit => tracing::trace!("Editing workout {id} is not supported"),
            ListTarget::Delete => self.delete_workout(id),
        }
    }

    pub fn on_delete_all_requested(&mut self) {
        for entry in self.store.take_all() {
            if let Some(marker) = entry.marker {
                self.map.remove_marker(marker);
            }
        }

        self.view.clear_workouts();
        self.persist();
        tracing::debug!("Deleted all workouts");
    }

    fn delete_workout(&mut self, id: WorkoutId) {
        let Some(entry) = self.store.remove(id) else {
            return;
        };

        if let Some(marker) = entry.marker {
            self.map.remove_marker(marker);
        }

        self.view.remove_workout(id);
        self.persist();
        tracing::debug!("Deleted workout {id}");
    }

    /// Writes the whole collection. A failed write leaves memory as it is.
    fn persist(&mut self) {
        if let Err(err) = save_workouts(&mut self.storage, &self.config.storage_key, self.store.workouts()) {
            tracing::error!("Failed to persist workouts: {err:?}");
        }
    }

    pub fn workouts(&self) -> impl Iterator<Item = &Workout> {
        self.store.workouts()
    }

    pub fn markers(&self) -> impl Iterator<Item = &M::Marker> {
        self.store.markers()
    }

    pub fn pending_location(&self) -> Option<Coords> {
        self.pending_location
    }

    pub fn map_ready(&self) -> bool {
        self.map_ready
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn geolocation(&self) -> &G {
        &self.geolocation
    }
}
