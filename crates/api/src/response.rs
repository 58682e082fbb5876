//! Shared response envelope types for API handlers.
//!
//! Resource payloads are keyed by resource name (`{"site": ...}`), so most
//! handlers define their own small envelope structs next to the handler.
//! Only the message-only envelope is shared.

use serde::Serialize;

/// `{ "message": "..." }` envelope, used where there is no resource to return.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
