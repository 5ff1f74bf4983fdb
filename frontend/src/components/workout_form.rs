use web_sys::HtmlInputElement;
use workout_tracker_lib::WorkoutKind;
use yew::prelude::*;

use crate::view::{FormField, FormState};

#[derive(PartialEq, Properties, Clone)]
pub struct WorkoutFormProps {
    pub form: FormState,
    pub enabled: bool,
    pub distance_ref: NodeRef,
    pub on_input: Callback<(FormField, String)>,
    pub on_type_change: Callback<()>,
    pub on_submit: Callback<()>,
}

#[function_component]
pub fn WorkoutFormComponent(props: &WorkoutFormProps) -> Html {
    let form = &props.form;

    let on_submit = props.on_submit.clone();
    let onsubmit = Callback::from(move |e: SubmitEvent| {
        e.prevent_default();
        on_submit.emit(());
    });

    let on_type_change = props.on_type_change.clone();
    let onchange = Callback::from(move |_: Event| on_type_change.emit(()));

    let input = |field: FormField| {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit((field, input.value()));
        })
    };

    let running = form.kind == WorkoutKind::Running;

    html! {
        <form class={classes!("form", (!form.visible).then_some("hidden"))} {onsubmit}>
            <div class="form__row">
                <label class="form__label">{"Type"}</label>
                <select class="form__input form__input--type" disabled={!props.enabled} {onchange}>
                    <option value="running" selected={running}>{"Running"}</option>
                    <option value="cycling" selected={!running}>{"Cycling"}</option>
                </select>
            </div>
            <div class="form__row">
                <label class="form__label">{"Distance"}</label>
                <input class="form__input form__input--distance" placeholder="km" ref={props.distance_ref.clone()}
                    disabled={!props.enabled} value={form.distance.clone()} oninput={input(FormField::Distance)} />
            </div>
            <div class="form__row">
                <label class="form__label">{"Duration"}</label>
                <input class="form__input form__input--duration" placeholder="min"
                    disabled={!props.enabled} value={form.duration.clone()} oninput={input(FormField::Duration)} />
            </div>
            if running {
                <div class="form__row">
                    <label class="form__label">{"Cadence"}</label>
                    <input class="form__input form__input--cadence" placeholder="step/min"
                        disabled={!props.enabled} value={form.cadence.clone()} oninput={input(FormField::Cadence)} />
                </div>
            } else {
                <div class="form__row">
                    <label class="form__label">{"Elev Gain"}</label>
                    <input class="form__input form__input--elevation" placeholder="meters"
                        disabled={!props.enabled} value={form.elevation.clone()} oninput={input(FormField::Elevation)} />
                </div>
            }
            <button class="form__btn">{"OK"}</button>
        </form>
    }
}
