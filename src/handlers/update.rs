//! # Update Handler
//!
//! `PUT /coffee/{id}` sets the supplied fields on an existing record.

use crate::model::ItemPatch;
use crate::table::{ItemStore, StoreOperation, UpdateItem};

use super::envelope::{build_response, Envelope};
use super::errors::{HandlerError, HandlerResult};
use super::request::ApiRequest;

pub async fn handle(store: &dyn ItemStore, request: &ApiRequest) -> Envelope {
    execute(store, request)
        .await
        .unwrap_or_else(HandlerError::into_envelope)
}

async fn execute(store: &dyn ItemStore, request: &ApiRequest) -> HandlerResult<Envelope> {
    let id = request.require_id()?;
    let patch = ItemPatch::from_body(request.body(), id)?;
    let updated = UpdateItem::new(id, patch).execute(store).await?;
    Ok(build_response(200, &updated))
}
