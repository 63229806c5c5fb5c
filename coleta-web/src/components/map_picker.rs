use leptos::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsCast;

use crate::LatLng;

// Leaflet glue in assets/map.js; the map itself lives on the JS side and
// these hooks are the only surface the component talks to.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = coletaInitMap)]
    fn init_map(container_id: &str, lat: f64, lng: f64, zoom: u32);

    #[wasm_bindgen(js_name = coletaSetView)]
    fn set_view(lat: f64, lng: f64);

    #[wasm_bindgen(js_name = coletaSetMarker)]
    fn set_marker(lat: f64, lng: f64);

    #[wasm_bindgen(js_name = coletaOnClick)]
    fn on_click(callback: &js_sys::Function);
}

const MAP_CONTAINER_ID: &str = "map";
const MAP_ZOOM: u32 = 15;

/// Interactive point selection. The map centers on `center`, the marker
/// follows `marker`, and a click overwrites `marker` with the clicked
/// coordinate pair.
#[component]
pub fn MapPicker(
    center: RwSignal<LatLng>,
    marker: RwSignal<LatLng>,
) -> impl IntoView {
    let initialized = store_value(false);

    create_effect(move |_| {
        let position = center.get();
        if initialized.get_value() {
            set_view(position.lat, position.lng);
            return;
        }
        initialized.set_value(true);
        // defer until the container div is attached
        request_animation_frame(move || {
            init_map(MAP_CONTAINER_ID, position.lat, position.lng, MAP_ZOOM);
            let callback =
                Closure::wrap(Box::new(move |lat: f64, lng: f64| {
                    marker.set(LatLng::new(lat, lng));
                }) as Box<dyn FnMut(f64, f64)>);
            on_click(callback.as_ref().unchecked_ref());
            // the map keeps calling back for the page's lifetime
            callback.forget();
        });
    });

    create_effect(move |_| {
        let position = marker.get();
        set_marker(position.lat, position.lng);
    });

    view! {
        <div id=MAP_CONTAINER_ID class="h-80 w-full mb-6 rounded"></div>
    }
}
