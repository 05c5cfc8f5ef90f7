//! # Delete Handler
//!
//! `DELETE /coffee/{id}` removes one record. Deleting an id that does not
//! exist still succeeds.

use serde::Serialize;

use crate::table::{DeleteItem, ItemStore, StoreOperation};

use super::envelope::{build_response, Envelope};
use super::errors::{HandlerError, HandlerResult};
use super::request::ApiRequest;

/// Delete confirmation body
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse<'a> {
    pub id: &'a str,
    pub deleted: bool,
}

pub async fn handle(store: &dyn ItemStore, request: &ApiRequest) -> Envelope {
    execute(store, request)
        .await
        .unwrap_or_else(HandlerError::into_envelope)
}

async fn execute(store: &dyn ItemStore, request: &ApiRequest) -> HandlerResult<Envelope> {
    let id = request.require_id()?;
    DeleteItem::new(id).execute(store).await?;
    Ok(build_response(200, &DeleteResponse { id, deleted: true }))
}
