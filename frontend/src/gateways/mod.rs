//! HTTP implementations of the gateway traits defined in `common::gateway`.

mod extraction;
mod store;

pub use extraction::HttpExtractionService;
pub use store::{HttpDocumentStore, SnapshotSubscription};

use common::gateway::GatewayError;
use gloo_net::http::Response;
use wasm_bindgen::JsValue;

pub(crate) fn network_error(err: gloo_net::Error) -> GatewayError {
    GatewayError::Network(err.to_string())
}

pub(crate) fn decode_error(err: gloo_net::Error) -> GatewayError {
    GatewayError::Decode(err.to_string())
}

pub(crate) fn js_error(value: JsValue) -> GatewayError {
    GatewayError::Network(format!("{:?}", value))
}

/// Passes 2xx responses through and turns everything else into
/// `GatewayError::Status` carrying the response body.
pub(crate) async fn ensure_ok(response: Response) -> Result<Response, GatewayError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = response.text().await.unwrap_or_default();
    Err(GatewayError::Status { status, message })
}
