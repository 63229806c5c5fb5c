use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::GeolocationPosition;

use crate::LatLng;

/// Requests the device position once. `on_position` runs when the browser
/// resolves it; denial or timeout never calls back, so the caller's
/// default position stays in place.
pub fn request_current_position(on_position: impl Fn(LatLng) + 'static) {
    let geolocation = match web_sys::window()
        .and_then(|window| window.navigator().geolocation().ok())
    {
        Some(geolocation) => geolocation,
        None => return,
    };

    let success =
        Closure::wrap(Box::new(move |position: GeolocationPosition| {
            let coords = position.coords();
            on_position(LatLng::new(coords.latitude(), coords.longitude()));
        }) as Box<dyn FnMut(GeolocationPosition)>);

    geolocation.get_current_position(success.as_ref().unchecked_ref());
    // keep the callback alive until the browser invokes it
    success.forget();
}
