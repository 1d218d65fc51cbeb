use gloo_timers::callback::Timeout;
use web_sys::window;
use yew::prelude::*;

use crate::config::MapConfig;
use crate::utils::gmaps_ffi;

#[derive(Properties, PartialEq)]
pub struct MapCanvasProps {
    pub map: MapConfig,
}

/// Interactive map container. Owns no planner state; the route polyline is
/// drawn onto it through the FFI renderer.
#[function_component(MapCanvas)]
pub fn map_canvas(props: &MapCanvasProps) -> Html {
    {
        let map = props.map.clone();

        use_effect_with((), move |_| {
            // Detect dark mode
            let is_dark = window()
                .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok())
                .flatten()
                .map(|mq| mq.matches())
                .unwrap_or(false);

            // Initialize map after a short delay to ensure DOM is ready
            Timeout::new(100, move || {
                log::info!("🗺️ Initializing route map from Rust/WASM");
                gmaps_ffi::init_route_map(
                    "map",
                    map.default_center_lat,
                    map.default_center_lng,
                    map.default_zoom,
                    is_dark,
                );
            })
            .forget();

            || ()
        });
    }

    html! {
        <div id="map" class="map-canvas"></div>
    }
}
