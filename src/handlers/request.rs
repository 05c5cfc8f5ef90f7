//! # Handler Request
//!
//! The gateway-neutral request a handler receives. Field names follow the
//! proxy event shape used by managed HTTP gateways, so an event payload
//! deserializes straight into it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::errors::{HandlerError, HandlerResult};

/// Path parameter carrying the item id
pub const ID_PARAM: &str = "id";

/// HTTP-style request delivered to a handler
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRequest {
    #[serde(default)]
    pub http_method: String,

    #[serde(default)]
    pub path: String,

    #[serde(default)]
    pub path_parameters: Option<HashMap<String, String>>,

    #[serde(default)]
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn new(http_method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            http_method: http_method.into(),
            path: path.into(),
            ..Default::default()
        }
    }

    /// Attach the `id` path parameter
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.path_parameters
            .get_or_insert_with(HashMap::new)
            .insert(ID_PARAM.to_string(), id.into());
        self
    }

    /// Attach a raw body
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// The `id` path parameter, if the route carries one.
    ///
    /// A present but blank id is a validation error.
    pub fn path_id(&self) -> HandlerResult<Option<&str>> {
        let id = self
            .path_parameters
            .as_ref()
            .and_then(|params| params.get(ID_PARAM));

        match id {
            None => Ok(None),
            Some(id) if id.trim().is_empty() => {
                Err(HandlerError::validation("Path parameter 'id' must not be empty"))
            }
            Some(id) => Ok(Some(id.as_str())),
        }
    }

    /// The `id` path parameter, required
    pub fn require_id(&self) -> HandlerResult<&str> {
        self.path_id()?
            .ok_or_else(|| HandlerError::validation("Missing path parameter 'id'"))
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }
}
