// ============================================================================
// GOOGLE MAPS FFI - Foreign Function Interface to the JS glue
// ============================================================================
// Wrappers only for the functions exported by assets/maps.js - no state,
// no logic
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Injects the Maps JS script for the given credential. The promise
    /// resolves once the library is usable and rejects if the script
    /// fails to load.
    #[wasm_bindgen(js_name = loadMapsLibrary)]
    pub fn load_maps_library(api_key: &str) -> js_sys::Promise;

    #[wasm_bindgen(js_name = initRouteMap)]
    pub fn init_route_map(container_id: &str, lat: f64, lng: f64, zoom: f64, is_dark: bool);

    /// Binds a Places autocomplete widget to the input element and forwards
    /// every place-changed payload (normalized by the glue) to `on_place`.
    #[wasm_bindgen(js_name = bindAutocomplete)]
    pub fn bind_autocomplete(input_id: &str, on_place: &Closure<dyn FnMut(JsValue)>);

    /// One route request. Resolves with the raw directions result, rejects
    /// with the non-OK status string.
    #[wasm_bindgen(js_name = computeRoute)]
    pub fn compute_route(request_json: &str) -> js_sys::Promise;

    /// Draws the given raw directions result on the map canvas
    #[wasm_bindgen(js_name = renderRoute)]
    pub fn render_route(result: &JsValue);
}
