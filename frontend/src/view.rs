use gloo_console::error;
use gloo_utils::window;
use workout_tracker_lib::{Workout, WorkoutId, WorkoutKind};
use workout_tracker_sync::{
    services::{LocationError, WorkoutView},
    validation::WorkoutForm,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormField {
    Distance,
    Duration,
    Cadence,
    Elevation,
}

/// What the entry form currently shows.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub visible: bool,
    pub kind: WorkoutKind,
    pub distance: String,
    pub duration: String,
    pub cadence: String,
    pub elevation: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            visible: false,
            kind: WorkoutKind::Running,
            distance: String::new(),
            duration: String::new(),
            cadence: String::new(),
            elevation: String::new(),
        }
    }
}

impl FormState {
    pub fn submission(&self) -> WorkoutForm {
        let extra = match self.kind {
            WorkoutKind::Running => &self.cadence,
            WorkoutKind::Cycling => &self.elevation,
        };
        WorkoutForm::new(self.kind, self.distance.clone(), self.duration.clone(), extra.clone())
    }
}

/// Sidebar state rendered by the root component. The controller drives it through
/// `WorkoutView`; the component only reads it, apart from typing into the form.
#[derive(Debug, Default)]
pub struct ListView {
    pub inputs_enabled: bool,
    /// Newest first.
    pub entries: Vec<Workout>,
    pub form: FormState,
    focus_requested: bool,
}

impl ListView {
    pub fn set_field(&mut self, field: FormField, value: String) {
        match field {
            FormField::Distance => self.form.distance = value,
            FormField::Duration => self.form.duration = value,
            FormField::Cadence => self.form.cadence = value,
            FormField::Elevation => self.form.elevation = value,
        }
    }

    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_requested)
    }
}

impl WorkoutView for ListView {
    fn enable_inputs(&mut self) {
        self.inputs_enabled = true;
    }

    fn render_workout(&mut self, workout: &Workout) {
        self.entries.insert(0, workout.clone());
    }

    fn remove_workout(&mut self, id: WorkoutId) {
        self.entries.retain(|workout| workout.id != id);
    }

    fn clear_workouts(&mut self) {
        self.entries.clear();
    }

    fn show_form(&mut self) {
        self.form.visible = true;
    }

    fn hide_form(&mut self) {
        self.form.visible = false;
    }

    fn reset_form(&mut self) {
        self.form.distance.clear();
        self.form.duration.clear();
        self.form.cadence.clear();
        self.form.elevation.clear();
    }

    fn focus_distance(&mut self) {
        self.focus_requested = true;
    }

    fn toggle_extra_field(&mut self) {
        self.form.kind = match self.form.kind {
            WorkoutKind::Running => WorkoutKind::Cycling,
            WorkoutKind::Cycling => WorkoutKind::Running,
        };
    }

    fn show_error(&mut self, location_error: &LocationError) {
        if window().alert_with_message(&location_error.to_string()).is_err() {
            error!(location_error.to_string());
        }
    }
}
