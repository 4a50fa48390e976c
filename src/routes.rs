//! Navigation surface: every screen is addressed by a path.
//!
//! | Path | Screen |
//! |------|--------|
//! | `/` | catalog home |
//! | `/explore?search=<query>` | explore / search |
//! | `/auth` | login and signup |
//! | `/onboarding` | preference wizard |
//! | `/profile` | user dashboard |
//! | `/property/<id>` | property detail |
//! | `/list-property` | listing wizard |
//! | `/saved` | saved properties |
//!
//! Anything else resolves to [`Route::NotFound`].

use std::borrow::Cow;
use std::fmt;

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

// Characters escaped inside a path segment or query value
const COMPONENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b':')
    .add(b'@')
    .add(b'[')
    .add(b']')
    .add(b'!');

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Explore { query: Option<String> },
    Auth,
    Onboarding,
    Profile,
    PropertyDetail { id: String },
    ListProperty,
    Saved,
    NotFound { path: String },
}

impl Route {
    pub fn explore(query: impl Into<String>) -> Self {
        let query = query.into();
        let query = query.trim();
        Route::Explore { query: if query.is_empty() { None } else { Some(query.to_string()) } }
    }

    pub fn property(id: impl Into<String>) -> Self {
        Route::PropertyDetail { id: id.into() }
    }

    /// Resolve a path (with optional query string) to a route. Never fails.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        let (path, query) = match input.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (input, None),
        };

        let normalized = if path.len() > 1 { path.trim_end_matches('/') } else { path };

        match normalized {
            "" | "/" => Route::Home,
            "/explore" => {
                Route::explore(query.and_then(|q| query_param(q, "search")).unwrap_or_default())
            }
            "/auth" => Route::Auth,
            "/onboarding" => Route::Onboarding,
            "/profile" => Route::Profile,
            "/list-property" => Route::ListProperty,
            "/saved" => Route::Saved,
            _ => match normalized.strip_prefix("/property/") {
                Some(id) if !id.is_empty() && !id.contains('/') => {
                    Route::PropertyDetail { id: decode_component(id) }
                }
                _ => Route::NotFound { path: input.to_string() },
            },
        }
    }

    /// Render the route back to a path
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Explore { query: None } => "/explore".to_string(),
            Route::Explore { query: Some(query) } => {
                format!("/explore?search={}", encode_component(query))
            }
            Route::Auth => "/auth".to_string(),
            Route::Onboarding => "/onboarding".to_string(),
            Route::Profile => "/profile".to_string(),
            Route::PropertyDetail { id } => format!("/property/{}", encode_component(id)),
            Route::ListProperty => "/list-property".to_string(),
            Route::Saved => "/saved".to_string(),
            Route::NotFound { path } => path.clone(),
        }
    }

    /// Screen title for headers
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Explore { .. } => "Explore",
            Route::Auth => "Sign In",
            Route::Onboarding => "Preferences",
            Route::Profile => "Profile",
            Route::PropertyDetail { .. } => "Property",
            Route::ListProperty => "List a Property",
            Route::Saved => "Saved Properties",
            Route::NotFound { .. } => "Not Found",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// External maps search link for a free-form location
pub fn map_link(location: &str) -> String {
    format!(
        "https://www.google.com/maps/search/?api=1&query={}",
        utf8_percent_encode(location.trim(), COMPONENT_ENCODE_SET)
    )
}

fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT_ENCODE_SET).to_string()
}

/// Percent-decode a component, treating `+` as a space
fn decode_component(value: &str) -> String {
    let spaced = value.replace('+', " ");
    let decoded = percent_decode_str(&spaced).decode_utf8_lossy();
    match decoded {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}

fn query_param(query: &str, name: &str) -> Option<String> {
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        (key == name).then(|| decode_component(value))
    })
}
