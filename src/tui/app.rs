//! TUI application state and event handling.
//!
//! The `App` owns the current route, the back stack and the active [`Screen`]. Each key is
//! offered to the screen first; whatever it leaves unconsumed falls through to the global
//! bindings:
//!
//! - **Ctrl+C**: quit from anywhere
//! - **Esc**: back to the previous route, or quit when there is none
//! - **q**, **1-7**: quit / jump to a top-level route, when no text field has focus
//!
//! Screens talk back through the [`Host`] trait. During a key or tick the app hands them an
//! [`Effects`] collector, then applies the collected notifications as transient status
//! messages and the last requested route as a navigation.

use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;
use tracing::{debug, warn};

use super::events::{Action, poll_event};
use super::rendering::{RenderState, render_ui};
use super::screens::{Screen, ScreenCtx};
use crate::catalog::Catalog;
use crate::clipboard::ClipboardProvider;
use crate::config::AppConfig;
use crate::host::{Host, MessageKind};
use crate::routes::Route;
use crate::storage::{Repository, StorageBackend};

/// Duration for success and info status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for error status messages (milliseconds)
const STATUS_ERROR_DURATION_MS: u64 = 5000;
/// Routes kept on the back stack; the oldest are dropped first
const MAX_HISTORY: usize = 50;

/// Top-level routes reachable with the number keys
pub const NAV_ROUTES: [(char, Route); 7] = [
    ('1', Route::Home),
    ('2', Route::Explore { query: None }),
    ('3', Route::Saved),
    ('4', Route::Profile),
    ('5', Route::ListProperty),
    ('6', Route::Onboarding),
    ('7', Route::Auth),
];

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub kind: MessageKind,
    pub expires_at: Instant,
}

/// Host handed to screens while they handle one event
#[derive(Debug, Default)]
struct Effects {
    route: Option<Route>,
    notifications: Vec<(String, MessageKind)>,
}

impl Host for Effects {
    fn navigate(&mut self, route: Route) {
        self.route = Some(route);
    }

    fn notify(&mut self, text: &str, kind: MessageKind) {
        self.notifications.push((text.to_string(), kind));
    }
}

pub struct App<'a, B: StorageBackend> {
    catalog: &'a Catalog,
    repo: &'a Repository<B>,
    config: &'a AppConfig,
    clipboard: Box<dyn ClipboardProvider>,
    route: Route,
    history: Vec<Route>,
    screen: Screen,
    should_quit: bool,
    status_message: Option<StatusMessage>,
    // Dirty state tracking for efficient rendering
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl<'a, B: StorageBackend> App<'a, B> {
    pub fn new(
        catalog: &'a Catalog,
        repo: &'a Repository<B>,
        config: &'a AppConfig,
        clipboard: Box<dyn ClipboardProvider>,
        route: Route,
    ) -> Self {
        let screen = Screen::open(&route, catalog, repo, config);
        Self {
            catalog,
            repo,
            config,
            clipboard,
            route,
            history: Vec::new(),
            screen,
            should_quit: false,
            status_message: None,
            needs_redraw: true, // Initial draw needed
            last_draw_time: Instant::now(),
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Set a transient status message with automatic expiry
    fn set_status(&mut self, text: impl Into<String>, kind: MessageKind) {
        let duration_ms = match kind {
            MessageKind::Error => STATUS_ERROR_DURATION_MS,
            MessageKind::Success | MessageKind::Info => STATUS_SUCCESS_DURATION_MS,
        };
        self.status_message = Some(StatusMessage {
            text: text.into(),
            kind,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    /// Check and clear expired status messages
    fn check_and_clear_expired_status(&mut self) {
        let should_clear =
            self.status_message.as_ref().is_some_and(|msg| Instant::now() >= msg.expires_at);
        if should_clear {
            self.status_message = None;
            self.needs_redraw = true;
        }
    }

    pub fn run<T: Backend>(&mut self, terminal: &mut Terminal<T>) -> Result<()> {
        while !self.should_quit {
            self.check_and_clear_expired_status();
            self.tick(Instant::now());

            // Draw if dirty or if it's been >100ms (for terminal resize handling)
            let elapsed = self.last_draw_time.elapsed();
            if self.needs_redraw || elapsed >= Duration::from_millis(100) {
                self.draw(terminal)?;
            }

            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action);
        }

        Ok(())
    }

    fn draw<T: Backend>(&mut self, terminal: &mut Terminal<T>) -> Result<()> {
        let now = Instant::now();
        terminal.draw(|f| {
            let state = RenderState {
                route: &self.route,
                screen: &self.screen,
                catalog: self.catalog,
                status_message: self.status_message.as_ref(),
                editing: self.screen.is_editing(),
            };
            render_ui(f, &state);
        })?;
        self.needs_redraw = false;
        self.last_draw_time = now;
        Ok(())
    }

    /// Let simulated work on the current screen complete
    fn tick(&mut self, now: Instant) {
        let mut effects = Effects::default();
        if self.screen.poll(now, &mut effects) {
            self.needs_redraw = true;
        }
        self.apply(effects);
    }

    /// Handle a user action (extracted for testing)
    fn handle_action(&mut self, action: Action) {
        if action == Action::None {
            return;
        }
        if action == Action::Quit {
            self.should_quit = true;
            return;
        }

        let mut effects = Effects::default();
        let mut ctx = ScreenCtx {
            catalog: self.catalog,
            repo: self.repo,
            config: self.config,
            clipboard: self.clipboard.as_mut(),
            host: &mut effects,
            now: Instant::now(),
        };
        let consumed = match self.screen.handle(action, &mut ctx) {
            Ok(consumed) => consumed,
            Err(e) => {
                warn!(error = %format!("{:#}", e), route = %self.route, "Action failed");
                effects.notify(&format!("{:#}", e), MessageKind::Error);
                true
            }
        };

        if !consumed {
            self.handle_global(action);
        }
        self.apply(effects);
        self.needs_redraw = true;
    }

    fn handle_global(&mut self, action: Action) {
        match action {
            Action::Back => self.back(),
            Action::Input(_) if self.screen.is_editing() => {}
            Action::Input('q') => self.should_quit = true,
            Action::Input(c) => {
                if let Some((_, route)) = NAV_ROUTES.iter().find(|(key, _)| *key == c) {
                    self.navigate(route.clone());
                }
            }
            _ => {}
        }
    }

    fn apply(&mut self, effects: Effects) {
        for (text, kind) in effects.notifications {
            self.set_status(text, kind);
        }
        if let Some(route) = effects.route {
            self.navigate(route);
        }
    }

    /// Open `route`. Re-entering the current route reloads it without growing the back stack.
    fn navigate(&mut self, route: Route) {
        debug!(from = %self.route, to = %route, "Navigate");
        if route != self.route {
            let previous = std::mem::replace(&mut self.route, route);
            if self.history.len() >= MAX_HISTORY {
                self.history.remove(0);
            }
            self.history.push(previous);
        }
        self.open_current();
    }

    fn back(&mut self) {
        match self.history.pop() {
            Some(route) => {
                debug!(from = %self.route, to = %route, "Back");
                self.route = route;
                self.open_current();
            }
            None => self.should_quit = true,
        }
    }

    fn open_current(&mut self) {
        self.screen.cancel_tasks();
        self.screen = Screen::open(&self.route, self.catalog, self.repo, self.config);
        self.needs_redraw = true;
    }
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::favorites::{FavoriteStore, LINK_COPIED_MESSAGE};
    use crate::storage::MemoryBackend;

    struct Env {
        catalog: Catalog,
        repo: Repository<MemoryBackend>,
        config: AppConfig,
    }

    impl Env {
        fn new() -> Self {
            Self {
                catalog: Catalog::builtin().unwrap(),
                repo: Repository::in_memory(),
                config: AppConfig {
                    analysis_delay_ms: 0,
                    submission_delay_ms: 0,
                    ..Default::default()
                },
            }
        }

        fn app(&self, route: Route) -> App<'_, MemoryBackend> {
            App::new(
                &self.catalog,
                &self.repo,
                &self.config,
                Box::new(MemoryClipboard::new()),
                route,
            )
        }
    }

    fn send(app: &mut App<'_, MemoryBackend>, actions: &[Action]) {
        for action in actions {
            app.handle_action(*action);
        }
    }

    #[test]
    fn test_app_new_initializes_state() {
        let env = Env::new();
        let app = env.app(Route::Home);

        assert_eq!(app.route(), &Route::Home);
        assert!(app.history.is_empty());
        assert!(!app.should_quit);
        assert!(app.needs_redraw);
    }

    #[test]
    fn test_handle_action_quit() {
        let env = Env::new();
        let mut app = env.app(Route::Home);

        app.handle_action(Action::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_handle_action_none_is_noop() {
        let env = Env::new();
        let mut app = env.app(Route::Home);
        app.needs_redraw = false;

        app.handle_action(Action::None);
        assert!(!app.needs_redraw);
    }

    #[test]
    fn test_number_keys_navigate_and_back_returns() {
        let env = Env::new();
        let mut app = env.app(Route::Home);

        send(&mut app, &[Action::Input('3')]);
        assert_eq!(app.route(), &Route::Saved);

        send(&mut app, &[Action::Input('4')]);
        assert_eq!(app.route(), &Route::Profile);

        send(&mut app, &[Action::Back]);
        assert_eq!(app.route(), &Route::Saved);
        send(&mut app, &[Action::Back]);
        assert_eq!(app.route(), &Route::Home);

        send(&mut app, &[Action::Back]);
        assert!(app.should_quit);
    }

    #[test]
    fn test_same_route_does_not_grow_history() {
        let env = Env::new();
        let mut app = env.app(Route::Home);

        send(&mut app, &[Action::Input('3'), Action::Input('3'), Action::Input('3')]);
        assert_eq!(app.route(), &Route::Saved);
        assert_eq!(app.history, vec![Route::Home]);
    }

    #[test]
    fn test_history_is_capped() {
        let env = Env::new();
        let mut app = env.app(Route::Home);

        for _ in 0..MAX_HISTORY {
            send(&mut app, &[Action::Input('3'), Action::Input('4')]);
        }

        assert_eq!(app.history.len(), MAX_HISTORY);
        assert_eq!(app.route(), &Route::Profile);
        assert_eq!(app.history.last(), Some(&Route::Saved));
        assert_eq!(app.history.first(), Some(&Route::Profile));
    }

    #[test]
    fn test_q_quits_only_outside_text_fields() {
        let env = Env::new();
        let mut app = env.app(Route::Auth);

        send(&mut app, &[Action::Input('q')]);
        assert!(!app.should_quit);

        let mut app = env.app(Route::Saved);
        send(&mut app, &[Action::Input('q')]);
        assert!(app.should_quit);
    }

    #[test]
    fn test_home_open_property_then_share() {
        let env = Env::new();
        let mut app = env.app(Route::Home);

        send(&mut app, &[Action::Submit]);
        let first = env.catalog.all()[0].id.clone();
        assert_eq!(app.route(), &Route::property(&first));

        send(&mut app, &[Action::Input('y')]);
        let status = app.status_message.as_ref().unwrap();
        assert_eq!(status.text, LINK_COPIED_MESSAGE);
        assert_eq!(status.kind, MessageKind::Success);
    }

    #[test]
    fn test_favorite_toggle_sets_status() {
        let env = Env::new();
        let mut app = env.app(Route::property("prop-2"));

        send(&mut app, &[Action::Input('f')]);
        assert!(FavoriteStore::new(&env.repo).is_saved("prop-2"));
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_failing_clipboard_reports_error_status() {
        let env = Env::new();
        let mut app = App::new(
            &env.catalog,
            &env.repo,
            &env.config,
            Box::new(MemoryClipboard::unavailable()),
            Route::property("prop-1"),
        );

        send(&mut app, &[Action::Input('y')]);
        let status = app.status_message.as_ref().unwrap();
        assert_eq!(status.kind, MessageKind::Error);
        assert_eq!(app.route(), &Route::property("prop-1"));
    }

    #[test]
    fn test_listing_flow_through_ticks() {
        let env = Env::new();
        let mut app = env.app(Route::ListProperty);

        for c in "porch.jpg".chars() {
            app.handle_action(Action::Input(c));
        }
        send(&mut app, &[Action::Submit, Action::Control('a')]);
        app.tick(Instant::now());

        let status = app.status_message.as_ref().unwrap();
        assert_eq!(status.text, crate::wizard::listing::ANALYSIS_COMPLETE_MESSAGE);
    }

    #[test]
    fn test_escape_cancels_analysis() {
        let mut env = Env::new();
        env.config.analysis_delay_ms = 60_000;
        let mut app = env.app(Route::ListProperty);

        for c in "porch.jpg".chars() {
            app.handle_action(Action::Input(c));
        }
        send(&mut app, &[Action::Submit, Action::Control('a')]);
        send(&mut app, &[Action::Back]);
        assert_eq!(app.route(), &Route::ListProperty);

        app.tick(Instant::now() + Duration::from_secs(120));
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_set_status_durations() {
        let env = Env::new();
        let mut app = env.app(Route::Home);

        let before = Instant::now();
        app.set_status("ok", MessageKind::Success);
        let success = app.status_message.as_ref().unwrap().expires_at;
        assert!(success >= before + Duration::from_millis(STATUS_SUCCESS_DURATION_MS));

        app.set_status("bad", MessageKind::Error);
        let error = app.status_message.as_ref().unwrap().expires_at;
        assert!(error >= before + Duration::from_millis(STATUS_ERROR_DURATION_MS));
    }

    #[test]
    fn test_check_and_clear_expired_status() {
        let env = Env::new();
        let mut app = env.app(Route::Home);

        app.status_message = Some(StatusMessage {
            text: "old".to_string(),
            kind: MessageKind::Info,
            expires_at: Instant::now() - Duration::from_millis(1),
        });
        app.needs_redraw = false;

        app.check_and_clear_expired_status();
        assert!(app.status_message.is_none());
        assert!(app.needs_redraw);
    }

    #[test]
    fn test_draw_clears_dirty_flag() {
        let env = Env::new();
        let mut app = env.app(Route::Explore { query: None });
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

        app.draw(&mut terminal).unwrap();
        assert!(!app.needs_redraw);
    }

    #[test]
    fn test_not_found_route_renders_and_recovers() {
        let env = Env::new();
        let mut app = env.app(Route::parse("/property/missing"));
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        app.draw(&mut terminal).unwrap();

        send(&mut app, &[Action::Submit]);
        assert_eq!(app.route(), &Route::Home);
    }
}
