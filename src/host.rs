//! Capabilities the core consumes from whatever is presenting it: navigation and
//! transient user notifications.

use crate::routes::Route;

/// Kind of transient message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
    Info,
}

/// A transient, non-blocking user notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub text: String,
    pub kind: MessageKind,
}

/// Presentation shell the core drives: the TUI, the CLI, or a test recorder
pub trait Host {
    fn navigate(&mut self, route: Route);

    fn notify(&mut self, text: &str, kind: MessageKind);
}

/// Host that records everything it is asked to do
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub routes: Vec<Route>,
    pub notifications: Vec<Notification>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_route(&self) -> Option<&Route> {
        self.routes.last()
    }

    pub fn last_notification(&self) -> Option<&Notification> {
        self.notifications.last()
    }
}

impl Host for RecordingHost {
    fn navigate(&mut self, route: Route) {
        self.routes.push(route);
    }

    fn notify(&mut self, text: &str, kind: MessageKind) {
        self.notifications.push(Notification { text: text.to_string(), kind });
    }
}
