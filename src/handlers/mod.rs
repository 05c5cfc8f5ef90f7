//! # Coffee Request Handlers
//!
//! Four stateless handlers, each mapping one request to at most one table
//! call and exactly one [`Envelope`]:
//!
//! | Route | Handler |
//! |---|---|
//! | `GET /coffee`, `GET /coffee/{id}` | [`read`] |
//! | `POST /coffee` | [`create`] |
//! | `PUT /coffee/{id}` | [`update`] |
//! | `DELETE /coffee/{id}` | [`delete`] |
//!
//! Validation happens before the table is touched, so a rejected request
//! never mutates anything. Handlers never return an error: every failure
//! is folded into a 400, 404 or 500 envelope.

pub mod create;
pub mod delete;
pub mod envelope;
pub mod errors;
pub mod invocation;
pub mod read;
pub mod request;
pub mod update;

use serde::{Deserialize, Serialize};

use crate::table::ItemStore;

pub use envelope::{build_response, Envelope};
pub use errors::{ErrorBody, HandlerError, HandlerResult};
pub use invocation::Invocation;
pub use request::ApiRequest;

/// Which handler a request is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Read,
    Create,
    Update,
    Delete,
}

impl Route {
    /// Route name for logging
    pub fn as_str(&self) -> &'static str {
        match self {
            Route::Read => "read",
            Route::Create => "create",
            Route::Update => "update",
            Route::Delete => "delete",
        }
    }
}

/// Run the handler for `route` and log the outcome
pub async fn dispatch(route: Route, store: &dyn ItemStore, request: &ApiRequest) -> Envelope {
    let item_id = request
        .path_parameters
        .as_ref()
        .and_then(|params| params.get(request::ID_PARAM))
        .cloned();
    let invocation = Invocation::new(route, item_id);

    let envelope = match route {
        Route::Read => read::handle(store, request).await,
        Route::Create => create::handle(store, request).await,
        Route::Update => update::handle(store, request).await,
        Route::Delete => delete::handle(store, request).await,
    };

    invocation.finish(&envelope);
    envelope
}

/// Answer a request for `route` that failed before reaching its handler
pub fn reject(route: Route, error: HandlerError) -> Envelope {
    let invocation = Invocation::new(route, None);
    let envelope = error.into_envelope();

    invocation.finish(&envelope);
    envelope
}
