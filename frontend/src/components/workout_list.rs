use workout_tracker_lib::{Workout, WorkoutId};
use workout_tracker_sync::services::ListTarget;
use yew::prelude::*;

#[derive(PartialEq, Properties, Clone)]
pub struct WorkoutListProps {
    /// Newest first.
    pub workouts: Vec<Workout>,
    pub on_click: Callback<(WorkoutId, ListTarget)>,
    pub on_delete_all: Callback<()>,
}

#[function_component]
pub fn WorkoutList(props: &WorkoutListProps) -> Html {
    let on_delete_all = props.on_delete_all.clone();
    let delete_all = Callback::from(move |_: MouseEvent| on_delete_all.emit(()));

    html! {
        <>
            if !props.workouts.is_empty() {
                <button class="workouts__delete-all" onclick={delete_all}>{"Delete all"}</button>
            }
            <ul class="workouts">
                { for props.workouts.iter().map(|workout| html! {
                    <WorkoutEntry key={workout.id.0} workout={workout.clone()} on_click={props.on_click.clone()} />
                }) }
            </ul>
        </>
    }
}

#[derive(PartialEq, Properties, Clone)]
struct WorkoutEntryProps {
    workout: Workout,
    on_click: Callback<(WorkoutId, ListTarget)>,
}

#[function_component]
fn WorkoutEntry(props: &WorkoutEntryProps) -> Html {
    let workout = &props.workout;
    let id = workout.id;

    // Buttons stop propagation so the entry itself only sees plain clicks.
    let target_cb = |target: ListTarget| {
        let on_click = props.on_click.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_click.emit((id, target));
        })
    };

    html! {
        <li class={classes!("workout", format!("workout--{}", workout.kind()))} onclick={target_cb(ListTarget::Entry)}>
            <div class="workout__header">
                <h2 class="workout__title">{workout.title()}</h2>
                <span class="workout__actions">
                    <button aria-label="edit-button" class="icon" onclick={target_cb(ListTarget::Edit)}>{"✎"}</button>
                    <button aria-label="delete-button" class="icon" onclick={target_cb(ListTarget::Delete)}>{"🗑"}</button>
                </span>
            </div>
            { for workout.stats().iter().map(|stat| html! {
                <div class="workout__details">
                    <span class="workout__icon">{stat.icon}</span>
                    <span class="workout__value">{stat.value}</span>
                    <span class="workout__unit">{stat.unit}</span>
                </div>
            }) }
        </li>
    }
}
