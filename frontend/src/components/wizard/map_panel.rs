//! Interactive picker map. A click sets the exact coordinate (always an
//! allowed override); the marker follows the resolved location from any
//! source.

use crate::web::leaflet::DamageMap;
use leptos::prelude::*;
use roadwatch_shared::location::LocationResolver;

const MAP_CONTAINER_ID: &str = "wizard-map";

#[component]
pub fn MapPanel(resolver: RwSignal<LocationResolver>) -> impl IntoView {
    // Leaflet handles are JS objects; keep them off the sync arena.
    let map_handle = StoredValue::new_local(Option::<DamageMap>::None);
    let container = NodeRef::<leptos::html::Div>::new();

    // Mount the map once the container is in the DOM.
    Effect::new(move |_| {
        if container.get().is_none() {
            return;
        }
        if map_handle.with_value(|m| m.is_some()) {
            return;
        }
        let center = resolver.with_untracked(|r| r.point());
        let map = DamageMap::mount(MAP_CONTAINER_ID, center, move |point| {
            resolver.update(|r| r.apply_manual_pick(point));
        });
        map_handle.set_value(Some(map));
    });

    // Follow the resolved location: photo GPS, device fix or manual pick
    // all recenter the view and move the marker.
    Effect::new(move |_| {
        let point = resolver.with(|r| r.point());
        map_handle.with_value(|handle| {
            if let Some(map) = handle {
                map.set_location(point);
            }
        });
    });

    view! {
        <div
            id=MAP_CONTAINER_ID
            node_ref=container
            class="h-64 rounded-3xl overflow-hidden border border-base-300 z-0"
        ></div>
    }
}
