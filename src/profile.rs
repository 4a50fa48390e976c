//! User dashboard: the signed-in (mock) user, their favorites, listings and inquiries.

use tracing::debug;

use crate::favorites::FavoriteStore;
use crate::host::{Host, MessageKind};
use crate::inquiries::InquiryBook;
use crate::models::{Inquiry, SavedPropertySnapshot, UserListing, UserPreferences};
use crate::routes::Route;
use crate::storage::{Repository, StorageBackend};
use crate::wizard::{my_listings, stored_preferences};

pub const LOGGED_OUT_MESSAGE: &str = "Logged out successfully";

/// Stand-in for an authenticated account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserProfile {
    pub name: &'static str,
    pub email: &'static str,
    pub joined: &'static str,
}

pub const CURRENT_PROFILE: UserProfile =
    UserProfile { name: "John Smith", email: "john.smith@example.com", joined: "January 2025" };

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileTab {
    #[default]
    Favorites,
    MyListings,
    Inquiries,
}

impl ProfileTab {
    pub const ALL: [ProfileTab; 3] =
        [ProfileTab::Favorites, ProfileTab::MyListings, ProfileTab::Inquiries];

    pub fn label(&self) -> &'static str {
        match self {
            ProfileTab::Favorites => "Favorites",
            ProfileTab::MyListings => "My Listings",
            ProfileTab::Inquiries => "Inquiries",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            ProfileTab::Favorites => ProfileTab::MyListings,
            ProfileTab::MyListings => ProfileTab::Inquiries,
            ProfileTab::Inquiries => ProfileTab::Favorites,
        }
    }

    pub fn previous(&self) -> Self {
        self.next().next()
    }
}

/// Everything the profile screen shows, loaded in one pass
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    pub saved: Vec<SavedPropertySnapshot>,
    pub listings: Vec<UserListing>,
    pub inquiries: Vec<Inquiry>,
    pub preferences: Option<UserPreferences>,
}

impl Dashboard {
    pub fn load<B: StorageBackend>(repo: &Repository<B>) -> Self {
        let dashboard = Self {
            saved: FavoriteStore::new(repo).list(),
            listings: my_listings(repo),
            inquiries: InquiryBook::new(repo).list(),
            preferences: stored_preferences(repo),
        };
        debug!(
            saved = dashboard.saved.len(),
            listings = dashboard.listings.len(),
            inquiries = dashboard.inquiries.len(),
            "Loaded dashboard"
        );
        dashboard
    }

    pub fn count(&self, tab: ProfileTab) -> usize {
        match tab {
            ProfileTab::Favorites => self.saved.len(),
            ProfileTab::MyListings => self.listings.len(),
            ProfileTab::Inquiries => self.inquiries.len(),
        }
    }
}

/// End the (mock) session and return to the auth screen
pub fn logout(host: &mut dyn Host) {
    host.notify(LOGGED_OUT_MESSAGE, MessageKind::Success);
    host.navigate(Route::Auth);
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::catalog::Catalog;
    use crate::host::RecordingHost;

    #[test]
    fn test_empty_dashboard() {
        let repo = Repository::in_memory();
        let dashboard = Dashboard::load(&repo);
        for tab in ProfileTab::ALL {
            assert_eq!(dashboard.count(tab), 0);
        }
        assert!(dashboard.preferences.is_none());
    }

    #[test]
    fn test_dashboard_reflects_saved() {
        let repo = Repository::in_memory();
        let catalog = Catalog::builtin().unwrap();
        let store = FavoriteStore::new(&repo);
        store.save(catalog.find("prop-1").unwrap(), Utc::now()).unwrap();
        store.save(catalog.find("prop-5").unwrap(), Utc::now()).unwrap();

        let dashboard = Dashboard::load(&repo);
        assert_eq!(dashboard.count(ProfileTab::Favorites), 2);
        assert_eq!(dashboard.count(ProfileTab::MyListings), 0);
    }

    #[test]
    fn test_tab_cycle() {
        assert_eq!(ProfileTab::Favorites.next(), ProfileTab::MyListings);
        assert_eq!(ProfileTab::Favorites.previous(), ProfileTab::Inquiries);
        assert_eq!(ProfileTab::Inquiries.next(), ProfileTab::Favorites);
    }

    #[test]
    fn test_logout() {
        let mut host = RecordingHost::new();
        logout(&mut host);
        assert_eq!(host.last_notification().unwrap().text, LOGGED_OUT_MESSAGE);
        assert_eq!(host.last_route(), Some(&Route::Auth));
    }
}
