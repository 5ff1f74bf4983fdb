use crate::{
    browser::{BrowserGeolocation, LocalStorage},
    components::{
        map_component::LeafletMap,
        workout_form::WorkoutFormComponent,
        workout_list::WorkoutList,
    },
    view::{FormField, ListView},
};
use gloo_console::{error, info};
use web_sys::HtmlInputElement;
use workout_tracker_lib::{Coords, WorkoutId};
use workout_tracker_sync::{
    services::{ListTarget, LocationError},
    SyncController,
};
use yew::prelude::*;

mod browser;
mod components;
mod view;

type Controller = SyncController<LeafletMap, BrowserGeolocation, LocalStorage, ListView>;

enum MainMsg {
    LocationFound(Result<Coords, LocationError>),
    MapReady,
    MapClicked(Coords),
    TypeChanged,
    FieldChanged(FormField, String),
    Submit,
    ListClicked(WorkoutId, ListTarget),
    DeleteAll,
}

struct Model {
    controller: Option<Controller>,
    distance_ref: NodeRef,
}

impl Component for Model {
    type Message = MainMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();

        let map = LeafletMap::new(
            link.callback(|()| MainMsg::MapReady),
            link.callback(MainMsg::MapClicked),
        );
        let controller = match map {
            Ok(map) => {
                let geolocation = BrowserGeolocation::new(link.callback(MainMsg::LocationFound));
                let mut controller = SyncController::new(map, geolocation, LocalStorage::open(), ListView::default());
                controller.initialize();
                Some(controller)
            }
            Err(err) => {
                error!(format!("Failed to create map container: {err:?}"));
                None
            }
        };

        Self {
            controller,
            distance_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let Some(controller) = &mut self.controller else {
            return false;
        };

        match msg {
            MainMsg::LocationFound(Ok(coords)) => controller.on_location_ready(coords),
            MainMsg::LocationFound(Err(err)) => controller.on_location_failed(err),
            MainMsg::MapReady => controller.on_map_ready(),
            MainMsg::MapClicked(coords) => controller.on_map_clicked(coords),
            MainMsg::TypeChanged => controller.on_type_changed(),
            MainMsg::FieldChanged(field, value) => controller.view_mut().set_field(field, value),
            MainMsg::Submit => {
                let form = controller.view().form.submission();
                match controller.on_form_submitted(&form) {
                    Ok(id) => info!(format!("Added workout {id}")),
                    Err(err) => info!(format!("Form not accepted: {err:?}")),
                }
            }
            MainMsg::ListClicked(id, target) => controller.on_list_clicked(id, target),
            MainMsg::DeleteAll => controller.on_delete_all_requested(),
        }
        true
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        let Some(controller) = &mut self.controller else {
            return;
        };

        if controller.view_mut().take_focus_request() {
            if let Some(input) = self.distance_ref.cast::<HtmlInputElement>() {
                if input.focus().is_err() {
                    error!("Failed to focus distance input");
                }
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let Some(controller) = &self.controller else {
            return html! { <div class="sidebar"><h1>{"Could not start the map"}</h1></div> };
        };

        let link = ctx.link();
        let list_view = controller.view();

        html! {
            <>
                <div class="sidebar">
                    <WorkoutFormComponent
                        form={list_view.form.clone()}
                        enabled={list_view.inputs_enabled}
                        distance_ref={self.distance_ref.clone()}
                        on_input={link.callback(|(field, value): (FormField, String)| MainMsg::FieldChanged(field, value))}
                        on_type_change={link.callback(|()| MainMsg::TypeChanged)}
                        on_submit={link.callback(|()| MainMsg::Submit)}
                    />
                    <WorkoutList
                        workouts={list_view.entries.clone()}
                        on_click={link.callback(|(id, target): (WorkoutId, ListTarget)| MainMsg::ListClicked(id, target))}
                        on_delete_all={link.callback(|()| MainMsg::DeleteAll)}
                    />
                </div>
                <div class="map-container">
                    {controller.map().render()}
                </div>
            </>
        }
    }
}

fn main() {
    yew::Renderer::<Model>::new().render();
}
