//! # Read Handler
//!
//! `GET /coffee` scans the table; `GET /coffee/{id}` reads one record.

use crate::table::{GetItem, ItemStore, ScanItems, StoreOperation};

use super::envelope::{build_response, Envelope};
use super::errors::{HandlerError, HandlerResult};
use super::request::ApiRequest;

pub async fn handle(store: &dyn ItemStore, request: &ApiRequest) -> Envelope {
    execute(store, request)
        .await
        .unwrap_or_else(HandlerError::into_envelope)
}

async fn execute(store: &dyn ItemStore, request: &ApiRequest) -> HandlerResult<Envelope> {
    match request.path_id()? {
        Some(id) => {
            let item = GetItem::new(id)
                .execute(store)
                .await?
                .ok_or_else(|| HandlerError::not_found(id))?;
            Ok(build_response(200, &item))
        }
        None => {
            let items = ScanItems.execute(store).await?;
            Ok(build_response(200, &items))
        }
    }
}
