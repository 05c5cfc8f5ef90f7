//! Coffee HTTP Routes
//!
//! Maps the five gateway routes onto the handlers. This layer only
//! translates between axum and [`ApiRequest`]/[`Envelope`]. A request it
//! cannot translate (bad path encoding, non UTF-8 body) is answered with
//! a 400 envelope without reaching a handler.

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use crate::handlers::{dispatch, reject, ApiRequest, Envelope, HandlerError, Route};
use crate::table::SharedStore;

type IdPath = Result<Path<String>, PathRejection>;

/// Create coffee routes
pub fn coffee_routes(store: SharedStore) -> Router {
    Router::new()
        .route("/coffee", get(list_handler).post(create_handler))
        .route(
            "/coffee/:id",
            get(get_handler).put(update_handler).delete(delete_handler),
        )
        .with_state(store)
}

/// Empty bodies count as absent. JSON must be UTF-8, so anything else is
/// rejected before it reaches a handler.
fn body_text(body: &Bytes) -> Result<Option<String>, HandlerError> {
    if body.is_empty() {
        return Ok(None);
    }

    String::from_utf8(body.to_vec())
        .map(Some)
        .map_err(|_| HandlerError::validation("Request body is not valid UTF-8"))
}

fn path_id(path: IdPath) -> Result<String, HandlerError> {
    match path {
        Ok(Path(id)) => Ok(id),
        Err(rejection) => {
            let message = format!("Invalid path parameter 'id': {}", rejection.body_text());
            Err(HandlerError::validation(message))
        }
    }
}

async fn list_handler(State(store): State<SharedStore>) -> Envelope {
    let request = ApiRequest::new("GET", "/coffee");
    dispatch(Route::Read, store.as_ref(), &request).await
}

async fn get_handler(State(store): State<SharedStore>, path: IdPath) -> Envelope {
    let id = match path_id(path) {
        Ok(id) => id,
        Err(e) => return reject(Route::Read, e),
    };

    let request = ApiRequest::new("GET", format!("/coffee/{id}")).with_id(id);
    dispatch(Route::Read, store.as_ref(), &request).await
}

async fn create_handler(State(store): State<SharedStore>, body: Bytes) -> Envelope {
    let mut request = ApiRequest::new("POST", "/coffee");
    request.body = match body_text(&body) {
        Ok(body) => body,
        Err(e) => return reject(Route::Create, e),
    };

    dispatch(Route::Create, store.as_ref(), &request).await
}

async fn update_handler(State(store): State<SharedStore>, path: IdPath, body: Bytes) -> Envelope {
    let (id, body) = match path_id(path).and_then(|id| Ok((id, body_text(&body)?))) {
        Ok(parts) => parts,
        Err(e) => return reject(Route::Update, e),
    };

    let mut request = ApiRequest::new("PUT", format!("/coffee/{id}")).with_id(id);
    request.body = body;
    dispatch(Route::Update, store.as_ref(), &request).await
}

async fn delete_handler(State(store): State<SharedStore>, path: IdPath) -> Envelope {
    let id = match path_id(path) {
        Ok(id) => id,
        Err(e) => return reject(Route::Delete, e),
    };

    let request = ApiRequest::new("DELETE", format!("/coffee/{id}")).with_id(id);
    dispatch(Route::Delete, store.as_ref(), &request).await
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        let Envelope {
            status_code,
            headers,
            body,
        } = self;

        let status = StatusCode::from_u16(status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = (status, body).into_response();

        for (name, value) in headers {
            if let (Ok(name), Ok(value)) = (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(&value),
            ) {
                response.headers_mut().insert(name, value);
            }
        }

        response
    }
}
