use gloo_console::{error, info};
use gloo_utils::document;
use leaflet::{LatLng, Map, MapOptions, Marker, MouseEvent, Popup, PopupOptions, TileLayer, TileLayerOptions};
use wasm_bindgen::{prelude::Closure, JsCast, JsValue};
use web_sys::{js_sys::{Function, Object, Reflect}, Element, HtmlElement, Node};
use workout_tracker_lib::Coords;
use workout_tracker_sync::services::{self, MapService};
use yew::prelude::*;

/// Leaflet map living in a detached container that the root component mounts.
pub struct LeafletMap {
    container: HtmlElement,
    map: Option<Map>,
    on_ready: Callback<()>,
    on_click: Callback<Coords>,
    click_listener: Option<Closure<dyn FnMut(MouseEvent)>>,
}

impl LeafletMap {
    pub fn new(on_ready: Callback<()>, on_click: Callback<Coords>) -> Result<Self, JsValue> {
        let container: Element = document().create_element("div")?;
        let container: HtmlElement = container.dyn_into()?;
        container.set_class_name("map");

        Ok(Self {
            container,
            map: None,
            on_ready,
            on_click,
            click_listener: None,
        })
    }

    pub fn render(&self) -> Html {
        let node: &Node = &self.container.clone().into();
        Html::VRef(node.clone())
    }
}

impl MapService for LeafletMap {
    type Marker = Marker;

    fn load_view(&mut self, center: Coords, zoom: f64, tiles: &services::TileLayer) {
        let map = Map::new_with_element(&self.container, &MapOptions::default());
        map.set_view(&LatLng::new(center.lat, center.lng), zoom);
        add_tile_layer(&map, tiles);
        self.map = Some(map);

        info!(format!("Map loaded at {}, {}", center.lat, center.lng));
        self.on_ready.emit(());
    }

    fn listen_for_clicks(&mut self) {
        let Some(map) = &self.map else {
            return;
        };

        let on_click = self.on_click.clone();
        let listener = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            let lat_lng = event.lat_lng();
            on_click.emit(Coords::new(lat_lng.lat(), lat_lng.lng()));
        });

        map.on("click", listener.as_ref());
        self.click_listener = Some(listener);
    }

    fn set_view(&mut self, center: Coords, zoom: f64, animate: bool) {
        let Some(map) = &self.map else {
            return;
        };

        if set_view_with_options(map, center, zoom, animate).is_err() {
            error!("Failed to move the map, falling back to a plain set_view");
            map.set_view(&LatLng::new(center.lat, center.lng), zoom);
        }
    }

    fn create_marker(&mut self, coords: Coords, popup: &services::Popup) -> Marker {
        let marker = Marker::new(&LatLng::new(coords.lat, coords.lng));

        let popup_opts = PopupOptions::default();
        popup_opts.set_auto_close(popup.auto_close);
        popup_opts.set_close_on_click(popup.close_on_click);
        popup_opts.set_class_name(popup.class_name.clone());

        let leaflet_popup = Popup::new(&popup_opts, None);
        leaflet_popup.set_content(&popup.content.clone().into());

        if let Some(map) = &self.map {
            marker.add_to(map);
            marker.bind_popup(&leaflet_popup);
            marker.open_popup();
        }

        marker
    }

    fn remove_marker(&mut self, marker: Marker) {
        marker.remove();
    }
}

fn add_tile_layer(map: &Map, tiles: &services::TileLayer) {
    let opts = TileLayerOptions::new();
    opts.set_update_when_idle(true);
    if Reflect::set(&opts, &"attribution".into(), &tiles.attribution.as_str().into()).is_err() {
        error!("Failed to set tile attribution");
    }
    TileLayer::new_options(&tiles.url_template, &opts).add_to(map);
}

/// Calls `setView(center, zoom, { animate, pan: { duration: 1 } })` on the JS map.
fn set_view_with_options(map: &Map, center: Coords, zoom: f64, animate: bool) -> Result<(), JsValue> {
    let pan = Object::new();
    Reflect::set(&pan, &"duration".into(), &JsValue::from_f64(1.))?;

    let options = Object::new();
    Reflect::set(&options, &"animate".into(), &animate.into())?;
    Reflect::set(&options, &"pan".into(), &pan)?;

    let target: &JsValue = map.as_ref();
    let set_view: Function = Reflect::get(target, &"setView".into())?.dyn_into()?;
    set_view.call3(target, &LatLng::new(center.lat, center.lng).into(), &zoom.into(), &options)?;
    Ok(())
}
