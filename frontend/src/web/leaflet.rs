//! Minimal bindings to the Leaflet `L` global (loaded from index.html).
//!
//! Only what the wizard's map panel needs: create a map with an OSM tile
//! layer, keep one marker on the resolved location, and report clicks as
//! coordinates.

use js_sys::Array;
use roadwatch_shared::location::GeoPoint;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    pub type Map;
    pub type TileLayer;
    pub type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    fn l_map(container_id: &str) -> Map;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn l_tile_layer(url_template: &str) -> TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn l_marker(lat_lng: &Array) -> Marker;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &Map, center: &Array, zoom: f64);

    #[wasm_bindgen(method)]
    fn on(this: &Map, event: &str, handler: &js_sys::Function);

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &TileLayer, map: &Map);

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_marker_to(this: &Marker, map: &Map);

    #[wasm_bindgen(method, js_name = setLatLng)]
    fn set_lat_lng(this: &Marker, lat_lng: &Array);
}

const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const ZOOM: f64 = 15.0;

fn lat_lng(point: GeoPoint) -> Array {
    Array::of2(&point.lat.into(), &point.lng.into())
}

/// The wizard's location-picker map. Click sets the exact coordinate via
/// the supplied callback; `set_location` recenters and moves the marker.
pub struct DamageMap {
    map: Map,
    marker: Marker,
    // Kept alive for the map's lifetime.
    _on_click: Closure<dyn FnMut(JsValue)>,
}

impl DamageMap {
    /// Mount a map into the DOM element with the given id. The element must
    /// already be in the document.
    pub fn mount(container_id: &str, center: GeoPoint, on_click: impl Fn(GeoPoint) + 'static) -> Self {
        let map = l_map(container_id);
        map.set_view(&lat_lng(center), ZOOM);
        l_tile_layer(TILE_URL).add_to(&map);

        let marker = l_marker(&lat_lng(center));
        marker.add_marker_to(&map);

        let on_click = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
            // Leaflet mouse events carry a `latlng` with plain lat/lng fields.
            let Ok(latlng) = js_sys::Reflect::get(&event, &JsValue::from_str("latlng")) else {
                return;
            };
            let lat = js_sys::Reflect::get(&latlng, &JsValue::from_str("lat"))
                .ok()
                .and_then(|v| v.as_f64());
            let lng = js_sys::Reflect::get(&latlng, &JsValue::from_str("lng"))
                .ok()
                .and_then(|v| v.as_f64());
            if let (Some(lat), Some(lng)) = (lat, lng) {
                on_click(GeoPoint::new(lat, lng));
            }
        });
        map.on("click", on_click.as_ref().unchecked_ref());

        Self {
            map,
            marker,
            _on_click: on_click,
        }
    }

    /// Recenter the view and move the marker to the resolved location.
    pub fn set_location(&self, point: GeoPoint) {
        let coords = lat_lng(point);
        self.map.set_view(&coords, ZOOM);
        self.marker.set_lat_lng(&coords);
    }
}
