//! Per-route screen state and the keys each screen understands.
//!
//! A handler returns `Ok(true)` when it consumed the action. Unconsumed actions fall through
//! to the app's global keys (navigation shortcuts, back, quit).

use std::time::Instant;

use anyhow::Result;
use chrono::Utc;
use tracing::{debug, warn};

use super::events::Action;
use crate::auth::{self, AuthMode, LoginForm, SignupForm};
use crate::carousel::Carousel;
use crate::catalog::{Catalog, Pager};
use crate::clipboard::ClipboardProvider;
use crate::config::AppConfig;
use crate::detail::{DetailTab, SIMILAR_LIMIT};
use crate::error::SubmitError;
use crate::favorites::{FavoriteStore, REMOVED_MESSAGE, SavedView, share_property};
use crate::filters::{FilterState, ai_search, parse_filter};
use crate::host::{Host, MessageKind};
use crate::inquiries::{ContactField, ContactFlow};
use crate::models::{Property, PropertyType, SavedPropertySnapshot};
use crate::profile::{self, Dashboard, ProfileTab};
use crate::routes::Route;
use crate::storage::{Repository, StorageBackend};
use crate::validation::ValidationErrors;
use crate::wizard::onboarding::TYPE_REQUIRED_MESSAGE;
use crate::wizard::{
    LISTING_FEATURES, ListingField, ListingStep, ListingWizard, OnboardingStep, OnboardingWizard,
    PREFERENCE_FEATURES, stored_preferences,
};

/// Longest text accepted by any input box
const MAX_INPUT_CHARS: usize = 256;

/// What a screen handler may touch
pub struct ScreenCtx<'a, 'e, B: StorageBackend> {
    pub catalog: &'a Catalog,
    pub repo: &'a Repository<B>,
    pub config: &'a AppConfig,
    pub clipboard: &'e mut dyn ClipboardProvider,
    pub host: &'e mut dyn Host,
    pub now: Instant,
}

fn push_char(text: &mut String, c: char) {
    if text.chars().count() < MAX_INPUT_CHARS {
        text.push(c);
    }
}

fn move_index(index: &mut usize, delta: isize, len: usize) {
    if len == 0 {
        *index = 0;
        return;
    }
    *index = (*index as isize + delta).clamp(0, len as isize - 1) as usize;
}

/// Step through `items` from `current`, wrapping at both ends
fn cycle<T: Copy + PartialEq>(items: &[T], current: T, delta: isize) -> T {
    let idx = items.iter().position(|item| *item == current).unwrap_or(0) as isize;
    items[(idx + delta).rem_euclid(items.len() as isize) as usize]
}

pub enum Screen {
    Home(HomeScreen),
    Explore(ExploreScreen),
    Detail(Box<DetailScreen>),
    Saved(SavedScreen),
    Profile(ProfileScreen),
    ListProperty(ListingScreen),
    Onboarding(OnboardingScreen),
    Auth(AuthScreen),
    NotFound(String),
}

impl Screen {
    /// Build the screen for `route`. Unknown property ids land on the not-found screen.
    pub fn open<B: StorageBackend>(
        route: &Route,
        catalog: &Catalog,
        repo: &Repository<B>,
        config: &AppConfig,
    ) -> Self {
        match route {
            Route::Home => Screen::Home(HomeScreen::new(config)),
            Route::Explore { query } => {
                Screen::Explore(ExploreScreen::new(query.as_deref().unwrap_or_default(), config))
            }
            Route::PropertyDetail { id } => match catalog.find(id) {
                Some(property) => {
                    Screen::Detail(Box::new(DetailScreen::open(property, repo, config)))
                }
                None => Screen::NotFound(route.path()),
            },
            Route::Saved => Screen::Saved(SavedScreen::load(repo)),
            Route::Profile => Screen::Profile(ProfileScreen::load(repo)),
            Route::ListProperty => Screen::ListProperty(ListingScreen::new(config)),
            Route::Onboarding => Screen::Onboarding(OnboardingScreen::load(repo)),
            Route::Auth => Screen::Auth(AuthScreen::default()),
            Route::NotFound { path } => Screen::NotFound(path.clone()),
        }
    }

    /// Whether keystrokes currently go into a text field
    pub fn is_editing(&self) -> bool {
        match self {
            Screen::Home(s) => s.editing,
            Screen::Explore(s) => s.mode != ExploreInput::Idle,
            Screen::Detail(s) => s.focus.is_some(),
            Screen::ListProperty(s) => s.is_editing(),
            Screen::Onboarding(s) => s.wizard.step() == OnboardingStep::Location,
            Screen::Auth(_) => true,
            Screen::Saved(_) | Screen::Profile(_) | Screen::NotFound(_) => false,
        }
    }

    /// Deliver any simulated completions that are due. Returns whether state changed.
    pub fn poll(&mut self, now: Instant, host: &mut dyn Host) -> bool {
        match self {
            Screen::Detail(s) => s.contact.poll(now, host),
            Screen::ListProperty(s) => s.wizard.poll(now, host),
            _ => false,
        }
    }

    /// Cancel in-flight simulated work so it can never complete
    pub fn cancel_tasks(&mut self) {
        match self {
            Screen::Detail(s) => s.contact.cancel(),
            Screen::ListProperty(s) => s.wizard.cancel(),
            _ => {}
        }
    }

    pub fn handle<B: StorageBackend>(
        &mut self,
        action: Action,
        ctx: &mut ScreenCtx<'_, '_, B>,
    ) -> Result<bool> {
        match self {
            Screen::Home(s) => s.handle(action, ctx),
            Screen::Explore(s) => s.handle(action, ctx),
            Screen::Detail(s) => s.handle(action, ctx),
            Screen::Saved(s) => s.handle(action, ctx),
            Screen::Profile(s) => s.handle(action, ctx),
            Screen::ListProperty(s) => s.handle(action, ctx),
            Screen::Onboarding(s) => s.handle(action, ctx),
            Screen::Auth(s) => s.handle(action, ctx),
            Screen::NotFound(_) => {
                if action == Action::Submit {
                    ctx.host.navigate(Route::Home);
                    return Ok(true);
                }
                Ok(false)
            }
        }
    }
}

pub struct HomeScreen {
    pub search: String,
    pub editing: bool,
    pub pager: Pager,
    pub selected: usize,
}

impl HomeScreen {
    fn new(config: &AppConfig) -> Self {
        Self { search: String::new(), editing: false, pager: config.home_pager(), selected: 0 }
    }

    pub fn visible<'c>(&self, catalog: &'c Catalog) -> &'c [Property] {
        &catalog.all()[..self.pager.visible(catalog.len())]
    }

    fn handle<B: StorageBackend>(
        &mut self,
        action: Action,
        ctx: &mut ScreenCtx<'_, '_, B>,
    ) -> Result<bool> {
        if self.editing {
            match action {
                Action::Input(c) => push_char(&mut self.search, c),
                Action::Backspace => {
                    self.search.pop();
                }
                Action::Submit => {
                    self.editing = false;
                    ctx.host.navigate(Route::explore(self.search.as_str()));
                }
                Action::Back => self.editing = false,
                _ => return Ok(false),
            }
            return Ok(true);
        }

        let visible = self.visible(ctx.catalog);
        match action {
            Action::Input('/') => self.editing = true,
            Action::Up => move_index(&mut self.selected, -1, visible.len()),
            Action::Down => move_index(&mut self.selected, 1, visible.len()),
            Action::Input('m') => {
                self.pager.load_more(ctx.catalog.len());
            }
            Action::Submit => match visible.get(self.selected) {
                Some(property) => ctx.host.navigate(Route::property(&property.id)),
                None => return Ok(false),
            },
            Action::Input('f') => match visible.get(self.selected) {
                Some(property) => {
                    FavoriteStore::new(ctx.repo).toggle_saved(property, ctx.host)?;
                }
                None => return Ok(false),
            },
            _ => return Ok(false),
        }
        Ok(true)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExploreInput {
    Idle,
    Filter,
    Ai,
}

pub struct ExploreScreen {
    pub input: String,
    pub mode: ExploreInput,
    pub filter: FilterState,
    pub filter_error: Option<String>,
    pub pager: Pager,
    pub selected: usize,
}

impl ExploreScreen {
    fn new(query: &str, config: &AppConfig) -> Self {
        Self {
            input: query.to_string(),
            mode: ExploreInput::Idle,
            filter: FilterState::new().with_query(query),
            filter_error: None,
            pager: config.explore_pager(),
            selected: 0,
        }
    }

    pub fn results<'c>(&self, catalog: &'c Catalog) -> Vec<&'c Property> {
        catalog.search(&self.filter)
    }

    fn reset_window(&mut self) {
        self.pager.reset();
        self.selected = 0;
    }

    fn apply(&mut self, host: &mut dyn Host) {
        match self.mode {
            ExploreInput::Filter => match parse_filter(&self.input) {
                Ok(filter) => {
                    debug!(filter = %filter.summary(), "Applied filter");
                    self.filter = filter;
                    self.filter_error = None;
                    self.mode = ExploreInput::Idle;
                    self.reset_window();
                }
                Err(e) => self.filter_error = Some(format!("{:#}", e)),
            },
            ExploreInput::Ai => {
                if ai_search(&self.input, &mut self.filter, host) {
                    self.mode = ExploreInput::Idle;
                    self.reset_window();
                }
            }
            ExploreInput::Idle => {}
        }
    }

    fn handle<B: StorageBackend>(
        &mut self,
        action: Action,
        ctx: &mut ScreenCtx<'_, '_, B>,
    ) -> Result<bool> {
        if self.mode != ExploreInput::Idle {
            match action {
                Action::Input(c) => push_char(&mut self.input, c),
                Action::Backspace => {
                    self.input.pop();
                }
                Action::Submit => self.apply(ctx.host),
                Action::Back => self.mode = ExploreInput::Idle,
                _ => return Ok(false),
            }
            return Ok(true);
        }

        let results = self.results(ctx.catalog);
        let visible = self.pager.visible(results.len());
        match action {
            Action::Input('/') => self.mode = ExploreInput::Filter,
            Action::Input('a') => {
                self.mode = ExploreInput::Ai;
                self.input.clear();
            }
            Action::Input('c') => {
                self.filter = FilterState::new();
                self.input.clear();
                self.filter_error = None;
                self.reset_window();
            }
            Action::Up => move_index(&mut self.selected, -1, visible),
            Action::Down => move_index(&mut self.selected, 1, visible),
            Action::Input('m') => {
                self.pager.load_more(results.len());
            }
            Action::Submit => match results.get(self.selected).filter(|_| self.selected < visible) {
                Some(property) => ctx.host.navigate(Route::property(&property.id)),
                None => return Ok(false),
            },
            Action::Input('f') => match results.get(self.selected) {
                Some(property) => {
                    FavoriteStore::new(ctx.repo).toggle_saved(property, ctx.host)?;
                }
                None => return Ok(false),
            },
            _ => return Ok(false),
        }
        Ok(true)
    }
}

pub struct DetailScreen {
    pub property_id: String,
    pub carousel: Carousel,
    pub tab: DetailTab,
    pub contact: ContactFlow,
    /// Contact form field being edited, if any
    pub focus: Option<ContactField>,
    pub saved: bool,
    pub views: Option<u32>,
    pub similar_selected: usize,
}

impl DetailScreen {
    fn open<B: StorageBackend>(
        property: &Property,
        repo: &Repository<B>,
        config: &AppConfig,
    ) -> Self {
        let store = FavoriteStore::new(repo);
        let views = store.record_view(&property.id).unwrap_or_else(|e| {
            warn!(id = %property.id, error = %format!("{:#}", e), "Failed to record view");
            None
        });

        Self {
            property_id: property.id.clone(),
            carousel: Carousel::new(property.images.len()),
            tab: DetailTab::default(),
            contact: ContactFlow::new(config.submission_delay()),
            focus: None,
            saved: store.is_saved(&property.id),
            views,
            similar_selected: 0,
        }
    }

    fn handle<B: StorageBackend>(
        &mut self,
        action: Action,
        ctx: &mut ScreenCtx<'_, '_, B>,
    ) -> Result<bool> {
        let Some(property) = ctx.catalog.find(&self.property_id) else {
            return Ok(false);
        };

        if let Some(field) = self.focus {
            match action {
                Action::Input(c) => push_char(self.contact.form.field_mut(field), c),
                Action::Backspace => {
                    self.contact.form.field_mut(field).pop();
                }
                Action::NextField | Action::Down => {
                    self.focus = Some(cycle(&ContactField::ALL, field, 1));
                }
                Action::PrevField | Action::Up => {
                    self.focus = Some(cycle(&ContactField::ALL, field, -1));
                }
                Action::Submit => {
                    match self.contact.submit(ctx.repo, property, ctx.host, ctx.now) {
                        Ok(_) => self.focus = None,
                        Err(SubmitError::Invalid(_)) => {}
                        Err(SubmitError::InProgress) => ctx
                            .host
                            .notify(&SubmitError::InProgress.to_string(), MessageKind::Info),
                        Err(e) => return Err(e.into()),
                    }
                }
                Action::Back => self.focus = None,
                _ => return Ok(false),
            }
            return Ok(true);
        }

        let similar = ctx.catalog.similar_to(&property.id, SIMILAR_LIMIT);
        match action {
            Action::Left => self.carousel.previous(),
            Action::Right => self.carousel.next(),
            Action::NextField => self.tab = self.tab.next(),
            Action::Up => move_index(&mut self.similar_selected, -1, similar.len()),
            Action::Down => move_index(&mut self.similar_selected, 1, similar.len()),
            Action::Submit => match similar.get(self.similar_selected) {
                Some(other) => ctx.host.navigate(Route::property(&other.id)),
                None => return Ok(false),
            },
            Action::Input('f') => {
                self.saved = FavoriteStore::new(ctx.repo).toggle_saved(property, ctx.host)?;
            }
            Action::Input('y') => share_property(&property.id, ctx.clipboard, ctx.host)?,
            Action::Input('c') => self.focus = Some(ContactField::Name),
            _ => return Ok(false),
        }
        Ok(true)
    }
}

pub struct SavedScreen {
    pub view: SavedView,
    pub selected: usize,
    pub items: Vec<SavedPropertySnapshot>,
}

impl SavedScreen {
    fn load<B: StorageBackend>(repo: &Repository<B>) -> Self {
        let mut screen = Self { view: SavedView::default(), selected: 0, items: Vec::new() };
        screen.reload(repo);
        screen
    }

    fn reload<B: StorageBackend>(&mut self, repo: &Repository<B>) {
        self.items = FavoriteStore::new(repo).list_view(self.view, Utc::now());
        self.selected = self.selected.min(self.items.len().saturating_sub(1));
    }

    fn handle<B: StorageBackend>(
        &mut self,
        action: Action,
        ctx: &mut ScreenCtx<'_, '_, B>,
    ) -> Result<bool> {
        let selected_id = self.items.get(self.selected).map(|s| s.id.clone());
        match (action, selected_id) {
            (Action::NextField, _) => {
                self.view = self.view.next();
                self.selected = 0;
                self.reload(ctx.repo);
            }
            (Action::Up, _) => move_index(&mut self.selected, -1, self.items.len()),
            (Action::Down, _) => move_index(&mut self.selected, 1, self.items.len()),
            (Action::Submit, Some(id)) => ctx.host.navigate(Route::property(id)),
            (Action::Input('r') | Action::Delete, Some(id)) => {
                if FavoriteStore::new(ctx.repo).unsave(&id)? {
                    ctx.host.notify(REMOVED_MESSAGE, MessageKind::Success);
                }
                self.reload(ctx.repo);
            }
            (Action::Input('y'), Some(id)) => share_property(&id, ctx.clipboard, ctx.host)?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}

pub struct ProfileScreen {
    pub tab: ProfileTab,
    pub dashboard: Dashboard,
    pub selected: usize,
}

impl ProfileScreen {
    fn load<B: StorageBackend>(repo: &Repository<B>) -> Self {
        Self { tab: ProfileTab::default(), dashboard: Dashboard::load(repo), selected: 0 }
    }

    /// Property opened by Enter on the current row
    fn selected_property(&self) -> Option<&str> {
        match self.tab {
            ProfileTab::Favorites => self.dashboard.saved.get(self.selected).map(|s| s.id.as_str()),
            ProfileTab::Inquiries => {
                self.dashboard.inquiries.get(self.selected).map(|i| i.property_id.as_str())
            }
            ProfileTab::MyListings => None,
        }
    }

    fn handle<B: StorageBackend>(
        &mut self,
        action: Action,
        ctx: &mut ScreenCtx<'_, '_, B>,
    ) -> Result<bool> {
        let len = self.dashboard.count(self.tab);
        match action {
            Action::NextField | Action::Right => {
                self.tab = self.tab.next();
                self.selected = 0;
            }
            Action::PrevField | Action::Left => {
                self.tab = self.tab.previous();
                self.selected = 0;
            }
            Action::Up => move_index(&mut self.selected, -1, len),
            Action::Down => move_index(&mut self.selected, 1, len),
            Action::Submit => match self.selected_property() {
                Some(id) => ctx.host.navigate(Route::property(id)),
                None => return Ok(false),
            },
            Action::Input('e') => ctx.host.navigate(Route::Onboarding),
            Action::Input('x') => profile::logout(ctx.host),
            _ => return Ok(false),
        }
        Ok(true)
    }
}

pub struct ListingScreen {
    pub wizard: ListingWizard,
    pub photo_input: String,
    /// Row on the details form: text fields, then the type row, then the features row
    pub focus: usize,
    pub feature_cursor: usize,
}

impl ListingScreen {
    pub const TYPE_ROW: usize = ListingField::ALL.len();
    pub const FEATURES_ROW: usize = ListingField::ALL.len() + 1;
    const ROWS: usize = ListingField::ALL.len() + 2;

    fn new(config: &AppConfig) -> Self {
        Self {
            wizard: ListingWizard::new(config.analysis_delay()),
            photo_input: String::new(),
            focus: 0,
            feature_cursor: 0,
        }
    }

    /// Text field under the cursor, when the cursor is on one
    pub fn focused_field(&self) -> Option<ListingField> {
        ListingField::ALL.get(self.focus).copied()
    }

    fn is_editing(&self) -> bool {
        match self.wizard.step() {
            ListingStep::CollectingPhotos => true,
            ListingStep::DetailsForm => self.focused_field().is_some(),
            ListingStep::Analyzing | ListingStep::Submitted => false,
        }
    }

    fn handle<B: StorageBackend>(
        &mut self,
        action: Action,
        ctx: &mut ScreenCtx<'_, '_, B>,
    ) -> Result<bool> {
        match self.wizard.step() {
            ListingStep::CollectingPhotos => self.handle_photos(action, ctx),
            ListingStep::Analyzing => {
                if action == Action::Back {
                    self.wizard.cancel();
                    return Ok(true);
                }
                Ok(false)
            }
            ListingStep::DetailsForm => self.handle_details(action, ctx),
            ListingStep::Submitted => Ok(false),
        }
    }

    fn handle_photos<B: StorageBackend>(
        &mut self,
        action: Action,
        ctx: &mut ScreenCtx<'_, '_, B>,
    ) -> Result<bool> {
        match action {
            Action::Input(c) => push_char(&mut self.photo_input, c),
            Action::Backspace => {
                self.photo_input.pop();
            }
            Action::Submit if !self.photo_input.trim().is_empty() => {
                self.wizard.add_photo(&self.photo_input)?;
                self.photo_input.clear();
            }
            Action::Submit | Action::Control('a') => {
                // Refusal is reported through the host
                let _ = self.wizard.start_analysis(ctx.host, ctx.now);
            }
            Action::Control('s') => self.wizard.skip_analysis()?,
            Action::Delete => {
                let count = self.wizard.draft().images.len();
                if count > 0 {
                    self.wizard.remove_photo(count - 1)?;
                }
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn handle_details<B: StorageBackend>(
        &mut self,
        action: Action,
        ctx: &mut ScreenCtx<'_, '_, B>,
    ) -> Result<bool> {
        match action {
            Action::Down | Action::NextField => self.focus = (self.focus + 1) % Self::ROWS,
            Action::Up | Action::PrevField => {
                self.focus = (self.focus + Self::ROWS - 1) % Self::ROWS
            }
            Action::Submit => match self.wizard.submit(ctx.repo, ctx.host) {
                Ok(_) | Err(SubmitError::Invalid(_)) => {}
                Err(e) => return Err(e.into()),
            },
            _ => return self.edit_row(action),
        }
        Ok(true)
    }

    fn edit_row(&mut self, action: Action) -> Result<bool> {
        if let Some(field) = self.focused_field() {
            let Some(value) = self.wizard.field_mut(field) else {
                return Ok(false);
            };
            match action {
                Action::Input(c) => push_char(value, c),
                Action::Backspace => {
                    value.pop();
                }
                _ => return Ok(false),
            }
            return Ok(true);
        }

        if self.focus == Self::TYPE_ROW {
            match action {
                Action::Left | Action::Right | Action::Input(' ') => {
                    self.wizard.cycle_property_type()?
                }
                _ => return Ok(false),
            }
            return Ok(true);
        }

        match action {
            Action::Left => move_index(&mut self.feature_cursor, -1, LISTING_FEATURES.len()),
            Action::Right => move_index(&mut self.feature_cursor, 1, LISTING_FEATURES.len()),
            Action::Input(' ') => {
                self.wizard.toggle_feature(LISTING_FEATURES[self.feature_cursor])?
            }
            _ => return Ok(false),
        }
        Ok(true)
    }
}

pub struct OnboardingScreen {
    pub wizard: OnboardingWizard,
    /// Highlighted option within the current step
    pub cursor: usize,
}

impl OnboardingScreen {
    fn load<B: StorageBackend>(repo: &Repository<B>) -> Self {
        let wizard =
            stored_preferences(repo).map(OnboardingWizard::with_preferences).unwrap_or_default();
        Self { wizard, cursor: 0 }
    }

    fn option_count(&self) -> usize {
        match self.wizard.step() {
            OnboardingStep::PropertyTypes => PropertyType::SEARCHABLE.len(),
            OnboardingStep::Rooms => 2,
            OnboardingStep::Features => PREFERENCE_FEATURES.len(),
            OnboardingStep::Budget | OnboardingStep::Location => 0,
        }
    }

    fn handle<B: StorageBackend>(
        &mut self,
        action: Action,
        ctx: &mut ScreenCtx<'_, '_, B>,
    ) -> Result<bool> {
        match action {
            Action::Submit => {
                if self.wizard.is_last_step() {
                    self.wizard.complete(ctx.repo, ctx.host)?;
                } else if self.wizard.next() {
                    self.cursor = 0;
                } else {
                    ctx.host.notify(TYPE_REQUIRED_MESSAGE, MessageKind::Error);
                }
                return Ok(true);
            }
            Action::Back => {
                let moved = self.wizard.back();
                if moved {
                    self.cursor = 0;
                }
                return Ok(moved);
            }
            _ => {}
        }

        let options = self.option_count();
        match (self.wizard.step(), action) {
            (OnboardingStep::Location, Action::Input(c)) => {
                push_char(self.wizard.location_mut(), c)
            }
            (OnboardingStep::Location, Action::Backspace) => {
                self.wizard.location_mut().pop();
            }
            (OnboardingStep::Budget, Action::Left | Action::Down) => self.wizard.adjust_budget(-1),
            (OnboardingStep::Budget, Action::Right | Action::Up) => self.wizard.adjust_budget(1),
            (OnboardingStep::Rooms, Action::Left | Action::Right) => {
                let delta = if action == Action::Left { -1 } else { 1 };
                if self.cursor == 0 {
                    self.wizard.adjust_bedrooms(delta);
                } else {
                    self.wizard.adjust_bathrooms(delta);
                }
            }
            (OnboardingStep::PropertyTypes, Action::Left | Action::Right) => {
                let delta = if action == Action::Left { -1 } else { 1 };
                move_index(&mut self.cursor, delta, options);
            }
            (_, Action::Up) => move_index(&mut self.cursor, -1, options),
            (_, Action::Down) => move_index(&mut self.cursor, 1, options),
            (OnboardingStep::PropertyTypes, Action::Input(' ')) => {
                self.wizard.toggle_type(PropertyType::SEARCHABLE[self.cursor])
            }
            (OnboardingStep::Features, Action::Input(' ')) => {
                self.wizard.toggle_feature(PREFERENCE_FEATURES[self.cursor])
            }
            _ => return Ok(false),
        }
        Ok(true)
    }
}

#[derive(Default)]
pub struct AuthScreen {
    pub mode: AuthMode,
    pub login: LoginForm,
    pub signup: SignupForm,
    pub field: usize,
    pub errors: ValidationErrors,
}

impl AuthScreen {
    /// (error key, label, value, masked) for each field of the current mode
    pub fn fields(&self) -> Vec<(&'static str, &'static str, &str, bool)> {
        match self.mode {
            AuthMode::Login => vec![
                ("email", "Email", self.login.email.as_str(), false),
                ("password", "Password", self.login.password.as_str(), true),
            ],
            AuthMode::Signup => vec![
                ("email", "Email", self.signup.email.as_str(), false),
                ("password", "Password", self.signup.password.as_str(), true),
                (
                    "confirmPassword",
                    "Confirm Password",
                    self.signup.confirm_password.as_str(),
                    true,
                ),
            ],
        }
    }

    fn field_mut(&mut self) -> &mut String {
        match (self.mode, self.field) {
            (AuthMode::Login, 0) => &mut self.login.email,
            (AuthMode::Login, _) => &mut self.login.password,
            (AuthMode::Signup, 0) => &mut self.signup.email,
            (AuthMode::Signup, 1) => &mut self.signup.password,
            (AuthMode::Signup, _) => &mut self.signup.confirm_password,
        }
    }

    fn handle<B: StorageBackend>(
        &mut self,
        action: Action,
        ctx: &mut ScreenCtx<'_, '_, B>,
    ) -> Result<bool> {
        let count = self.fields().len();
        match action {
            Action::Input(c) => push_char(self.field_mut(), c),
            Action::Backspace => {
                self.field_mut().pop();
            }
            Action::NextField | Action::Down => self.field = (self.field + 1) % count,
            Action::PrevField | Action::Up => self.field = (self.field + count - 1) % count,
            Action::Control('t') => {
                self.mode = match self.mode {
                    AuthMode::Login => AuthMode::Signup,
                    AuthMode::Signup => AuthMode::Login,
                };
                self.field = 0;
                self.errors = ValidationErrors::new();
            }
            Action::Control('g') => auth::continue_as_guest(ctx.host),
            Action::Submit => {
                let result = match self.mode {
                    AuthMode::Login => auth::login(&self.login, ctx.host),
                    AuthMode::Signup => auth::signup(&self.signup, ctx.host),
                };
                self.errors = result.err().unwrap_or_default();
            }
            _ => return Ok(false),
        }
        Ok(true)
    }
}
