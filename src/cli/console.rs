use std::io::{self, Write};

use crate::host::{Host, MessageKind};
use crate::routes::Route;
use crate::utils::sanitize;

/// Host for one-shot commands: notifications become status lines, navigation is only noted
pub struct ConsoleHost<W: Write> {
    out: W,
    last_route: Option<Route>,
}

impl ConsoleHost<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> ConsoleHost<W> {
    pub fn new(out: W) -> Self {
        Self { out, last_route: None }
    }

    /// Where the last operation asked to go, if anywhere
    pub fn last_route(&self) -> Option<&Route> {
        self.last_route.as_ref()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Host for ConsoleHost<W> {
    fn navigate(&mut self, route: Route) {
        tracing::debug!(route = %route, "Navigation requested");
        self.last_route = Some(route);
    }

    fn notify(&mut self, text: &str, kind: MessageKind) {
        let marker = match kind {
            MessageKind::Success => "✓",
            MessageKind::Error => "✗",
            MessageKind::Info => "•",
        };
        // Status output is best effort
        let _ = writeln!(self.out, "{} {}", marker, sanitize(text));
    }
}
