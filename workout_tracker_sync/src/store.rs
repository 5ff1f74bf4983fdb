use workout_tracker_lib::{Workout, WorkoutId};

/// A workout and the marker showing it. The marker is missing only while the map
/// has not been loaded yet.
#[derive(Debug)]
pub struct StoredWorkout<M> {
    pub workout: Workout,
    pub marker: Option<M>,
}

/// Ordered collection of workouts, oldest first, each paired with its marker.
///
/// Keeping the pair in one entry means the marker at position `i` always belongs to
/// the workout at position `i`: there is no second sequence that could drift.
#[derive(Debug)]
pub struct WorkoutStore<M> {
    entries: Vec<StoredWorkout<M>>,
}

impl<M> Default for WorkoutStore<M> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<M> WorkoutStore<M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store for workouts loaded before the map exists. No markers yet.
    pub fn from_workouts(workouts: Vec<Workout>) -> Self {
        Self {
            entries: workouts.into_iter()
                .map(|workout| StoredWorkout { workout, marker: None })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[StoredWorkout<M>] {
        &self.entries
    }

    pub fn workouts(&self) -> impl Iterator<Item = &Workout> {
        self.entries.iter().map(|entry| &entry.workout)
    }

    /// Markers in workout order. Entries without a marker are skipped.
    pub fn markers(&self) -> impl Iterator<Item = &M> {
        self.entries.iter().filter_map(|entry| entry.marker.as_ref())
    }

    pub fn push(&mut self, workout: Workout, marker: Option<M>) {
        self.entries.push(StoredWorkout { workout, marker });
    }

    /// Index of the first workout with `id`.
    pub fn position(&self, id: WorkoutId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.workout.id == id)
    }

    pub fn get(&self, id: WorkoutId) -> Option<&Workout> {
        self.position(id).map(|index| &self.entries[index].workout)
    }

    /// Removes the workout with `id` together with its marker.
    pub fn remove(&mut self, id: WorkoutId) -> Option<StoredWorkout<M>> {
        let index = self.position(id)?;
        Some(self.entries.remove(index))
    }

    /// Empties the store, handing back every entry so markers can be taken off the map.
    pub fn take_all(&mut self) -> Vec<StoredWorkout<M>> {
        std::mem::take(&mut self.entries)
    }

    /// Creates markers for every entry that has none, in order. Returns how many were made.
    pub fn attach_missing_markers(&mut self, mut create: impl FnMut(&Workout) -> M) -> usize {
        let mut created = 0;
        for entry in self.entries.iter_mut().filter(|entry| entry.marker.is_none()) {
            entry.marker = Some(create(&entry.workout));
            created += 1;
        }
        created
    }
}
