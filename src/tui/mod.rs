//! Interactive terminal browser
mod app;
mod events;
mod layout;
mod rendering;
mod screens;
mod terminal;

use anyhow::Result;
pub use app::App;
use tracing::info;

use self::terminal::TerminalManager;
use crate::clipboard::SystemClipboard;
use crate::config::AppContext;
use crate::routes::Route;

/// Run the interactive TUI starting at `route`
pub fn run_interactive(ctx: &AppContext, route: Route) -> Result<()> {
    info!(route = %route, properties = ctx.catalog.len(), "Starting browser");

    let mut manager = TerminalManager::new()?;
    let mut app = App::new(
        &ctx.catalog,
        &ctx.repo,
        &ctx.config,
        Box::new(SystemClipboard::new()),
        route,
    );

    let res = app.run(manager.terminal_mut());
    manager.restore()?;

    info!(route = %app.route(), "Browser closed");
    res
}
