//! Structured logging for the coffee service
//!
//! # Usage
//!
//! ```ignore
//! use coffee_api::observability::{log_event_with_fields, Event, Logger};
//!
//! log_event_with_fields(Event::StoreReady, &[("backend", "memory")]);
//! Logger::warn("CORS_ORIGIN_INVALID", &[("origin", "http://bad\norigin")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

fn severity_for(event: Event) -> Severity {
    if event.is_fatal() {
        Severity::Fatal
    } else if event.is_failure() {
        Severity::Error
    } else {
        Severity::Info
    }
}

/// Log a lifecycle event
pub fn log_event(event: Event) {
    Logger::log(severity_for(event), event.as_str(), &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(severity_for(event), event.as_str(), fields);
}
