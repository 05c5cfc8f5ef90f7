//! # Invocation Context
//!
//! Identity and timing for one handler invocation, logged once when the
//! handler returns.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::observability::{log_event_with_fields, Event};

use super::envelope::Envelope;
use super::Route;

/// Context for a single request
#[derive(Debug, Clone, Serialize)]
pub struct Invocation {
    /// Invocation ID
    pub id: Uuid,

    /// Handler being invoked
    pub route: Route,

    /// Path parameter, if any
    pub item_id: Option<String>,

    /// Invocation timestamp
    pub started_at: DateTime<Utc>,
}

impl Invocation {
    pub fn new(route: Route, item_id: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            route,
            item_id,
            started_at: Utc::now(),
        }
    }

    /// Milliseconds since the invocation started
    pub fn elapsed_ms(&self) -> i64 {
        (Utc::now() - self.started_at).num_milliseconds()
    }

    /// Log the outcome. 5xx envelopes are logged as failures with the
    /// body attached.
    pub fn finish(&self, envelope: &Envelope) {
        let request_id = self.id.to_string();
        let status = envelope.status_code.to_string();
        let duration = self.elapsed_ms().to_string();

        let mut fields = vec![
            ("request_id", request_id.as_str()),
            ("route", self.route.as_str()),
            ("status", status.as_str()),
            ("duration_ms", duration.as_str()),
        ];
        if let Some(id) = &self.item_id {
            fields.push(("item_id", id.as_str()));
        }

        if envelope.is_server_error() {
            fields.push(("body", envelope.body.as_str()));
            log_event_with_fields(Event::RequestFailed, &fields);
        } else {
            log_event_with_fields(Event::RequestComplete, &fields);
        }
    }
}
