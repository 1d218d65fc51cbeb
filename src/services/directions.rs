// ============================================================================
// DIRECTIONS SERVICE - Route requests against the external maps API
// ============================================================================
// Stateless wrapper over the FFI boundary; no UI state lives here
// ============================================================================

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use crate::models::{DirectionsRequest, DirectionsResult};
use crate::utils::gmaps_ffi;

/// Failure classes of a single route request
#[derive(Debug, Clone, PartialEq)]
pub enum DirectionsError {
    /// The request could not be serialized for the FFI boundary
    Request(String),
    /// The service answered with a non-OK status
    Service(String),
    /// The service answered OK but the payload did not parse
    Parse(String),
}

impl std::fmt::Display for DirectionsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DirectionsError::Request(msg) => write!(f, "Request error: {}", msg),
            DirectionsError::Service(status) => write!(f, "Directions service returned {}", status),
            DirectionsError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for DirectionsError {}

/// Directions client - stateless, one async call per invocation
#[derive(Clone, Default)]
pub struct DirectionsService;

impl DirectionsService {
    pub fn new() -> Self {
        Self
    }

    /// Issues one route request. Returns the parsed summary together with
    /// the raw JS payload so the caller can hand the latter to the
    /// polyline renderer untouched.
    pub async fn route(
        &self,
        request: &DirectionsRequest,
    ) -> Result<(DirectionsResult, JsValue), DirectionsError> {
        let request_json = serde_json::to_string(request)
            .map_err(|e| DirectionsError::Request(format!("{}", e)))?;

        log::info!("🧭 Requesting driving route with {} stopover(s)", request.waypoints.len());

        let raw = JsFuture::from(gmaps_ffi::compute_route(&request_json))
            .await
            .map_err(|status| DirectionsError::Service(status_string(&status)))?;

        let result: DirectionsResult = serde_wasm_bindgen::from_value(raw.clone())
            .map_err(|e| DirectionsError::Parse(format!("{}", e)))?;

        Ok((result, raw))
    }
}

fn status_string(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
