//! # Response Envelope
//!
//! The uniform `{statusCode, headers, body}` shape every handler returns.
//! Building one does not depend on any HTTP framework.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const APPLICATION_JSON: &str = "application/json";

/// Handler response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    /// JSON-serialized payload
    pub body: String,
}

impl Envelope {
    /// Parse the body back into JSON
    pub fn json_body(&self) -> serde_json::Result<Value> {
        serde_json::from_str(&self.body)
    }

    pub fn is_server_error(&self) -> bool {
        self.status_code >= 500
    }
}

/// Build an envelope from a status code and any serializable payload.
///
/// Never fails: a payload that cannot be serialized yields a 500 envelope.
pub fn build_response<T: Serialize + ?Sized>(status_code: u16, body: &T) -> Envelope {
    match serde_json::to_string(body) {
        Ok(body) => envelope(status_code, body),
        Err(e) => envelope(
            500,
            serde_json::json!({ "message": format!("Failed to serialize response: {e}") })
                .to_string(),
        ),
    }
}

fn envelope(status_code: u16, body: String) -> Envelope {
    let mut headers = BTreeMap::new();
    headers.insert(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string());

    Envelope {
        status_code,
        headers,
        body,
    }
}
