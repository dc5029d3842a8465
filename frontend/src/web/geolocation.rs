//! One-shot wrapper over `navigator.geolocation`.
//!
//! Acquisition is bounded: after [`GEOLOCATION_TIMEOUT_MS`] the error
//! callback fires and the caller falls back to the default or manual
//! location. Staleness across overlapping requests is handled by the
//! caller via `LocationResolver` tokens, not here.

use roadwatch_shared::location::GeoPoint;
use wasm_bindgen::prelude::*;
use web_sys::{Position, PositionError, PositionOptions};

pub const GEOLOCATION_TIMEOUT_MS: u32 = 8_000;

/// Request the device position once. The callback receives either a fix or
/// a human-readable error (denial, timeout, unsupported browser).
pub fn request_position(callback: impl Fn(Result<GeoPoint, String>) + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let geolocation = match window.navigator().geolocation() {
        Ok(geo) => geo,
        Err(_) => {
            callback(Err(
                "Geolocation is not supported by this browser.".to_string()
            ));
            return;
        }
    };

    let callback = std::rc::Rc::new(callback);

    let on_success = {
        let callback = callback.clone();
        Closure::<dyn FnMut(Position)>::new(move |position: Position| {
            let coords = position.coords();
            callback(Ok(GeoPoint::new(coords.latitude(), coords.longitude())));
        })
    };

    let on_error = {
        let callback = callback.clone();
        Closure::<dyn FnMut(PositionError)>::new(move |error: PositionError| {
            callback(Err(error.message()));
        })
    };

    let options = PositionOptions::new();
    options.set_enable_high_accuracy(true);
    options.set_timeout(GEOLOCATION_TIMEOUT_MS);

    let issued = geolocation.get_current_position_with_error_callback_and_options(
        on_success.as_ref().unchecked_ref(),
        Some(on_error.as_ref().unchecked_ref()),
        &options,
    );

    if issued.is_err() {
        callback(Err("Failed to query device location.".to_string()));
        return;
    }

    // One-shot callbacks; leak them so they outlive this call. The browser
    // invokes exactly one of the two within the timeout bound.
    on_success.forget();
    on_error.forget();
}
