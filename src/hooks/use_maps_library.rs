use wasm_bindgen_futures::{spawn_local, JsFuture};
use yew::prelude::*;

use crate::utils::gmaps_ffi;

/// Loads the Google Maps JS library once on mount and reports readiness.
///
/// The planner renders its map and autocomplete children only after this
/// flips to true; until then the external `google.maps` namespace does not
/// exist and every FFI call would throw.
#[hook]
pub fn use_maps_library(api_key: String) -> bool {
    let ready = use_state(|| false);

    {
        let ready = ready.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match JsFuture::from(gmaps_ffi::load_maps_library(&api_key)).await {
                    Ok(_) => {
                        log::info!("✅ Maps library loaded");
                        ready.set(true);
                    }
                    Err(e) => {
                        log::error!("❌ Maps library failed to load: {:?}", e);
                    }
                }
            });
            || ()
        });
    }

    *ready
}
