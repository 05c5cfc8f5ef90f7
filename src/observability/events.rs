//! Observable events
//!
//! Every lifecycle and request log line names one of these.

use std::fmt;

/// Observable events in the coffee service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot & lifecycle
    /// Process startup begins
    BootStart,
    /// Startup aborted (FATAL)
    BootFailed,
    /// Configuration file written by `init`
    ConfigWritten,
    /// Configuration loaded and validated
    ConfigLoaded,
    /// Table client ready
    StoreReady,
    /// Gateway bound and accepting requests
    ServerListening,
    /// Gateway stopped
    ServerStopped,

    // Requests
    /// Handler returned a 2xx/4xx envelope
    RequestComplete,
    /// Handler returned a 5xx envelope
    RequestFailed,
}

impl Event {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "BOOT_START",
            Event::BootFailed => "BOOT_FAILED",
            Event::ConfigWritten => "CONFIG_WRITTEN",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::StoreReady => "STORE_READY",
            Event::ServerListening => "SERVER_LISTENING",
            Event::ServerStopped => "SERVER_STOPPED",
            Event::RequestComplete => "REQUEST_COMPLETE",
            Event::RequestFailed => "REQUEST_FAILED",
        }
    }

    /// Returns true if this event means the process cannot continue
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::BootFailed)
    }

    /// Returns true if this event reports a failure
    pub fn is_failure(&self) -> bool {
        matches!(self, Event::BootFailed | Event::RequestFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
