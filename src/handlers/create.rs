//! # Create Handler
//!
//! `POST /coffee` writes the full record from the body. The write is an
//! upsert: an existing record with the same id is replaced.

use crate::model::Item;
use crate::table::{ItemStore, PutItem, StoreOperation};

use super::envelope::{build_response, Envelope};
use super::errors::{HandlerError, HandlerResult};
use super::request::ApiRequest;

pub async fn handle(store: &dyn ItemStore, request: &ApiRequest) -> Envelope {
    execute(store, request)
        .await
        .unwrap_or_else(HandlerError::into_envelope)
}

async fn execute(store: &dyn ItemStore, request: &ApiRequest) -> HandlerResult<Envelope> {
    let item = Item::from_body(request.body())?;
    let created = PutItem::new(item).execute(store).await?;
    Ok(build_response(201, &created))
}
