//! Saved properties: the favorite toggle, view counting, saved-list views and link sharing.
//!
//! The saved collection is a single document read and rewritten whole on every mutation.
//! Membership is a linear scan by id; the collection never holds two snapshots for one id.

use std::fmt;
use std::str::FromStr;

use anyhow::{Result, anyhow};
use chrono::{DateTime, Duration, Utc};
use tracing::info;

use crate::clipboard::{ClipboardProvider, copy_with_provider};
use crate::host::{Host, MessageKind};
use crate::models::{Property, SavedPropertySnapshot};
use crate::routes::Route;
use crate::storage::{Repository, SAVED_PROPERTIES, StorageBackend};

pub const ADDED_MESSAGE: &str = "Added to saved properties";
pub const REMOVED_MESSAGE: &str = "Removed from saved properties";
pub const LINK_COPIED_MESSAGE: &str = "Property link copied to clipboard";
pub const EMPTY_STATE_MESSAGE: &str = "Start exploring properties and save your favorites here";

/// Snapshots saved within this many days count as recent
const RECENT_DAYS: i64 = 7;
/// Snapshots viewed more than this many times count as frequent
const FREQUENT_VIEWS: u32 = 3;

/// Saved-list view filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SavedView {
    #[default]
    All,
    Recent,
    Frequent,
}

impl SavedView {
    pub const ALL: [SavedView; 3] = [SavedView::All, SavedView::Recent, SavedView::Frequent];

    pub fn label(&self) -> &'static str {
        match self {
            SavedView::All => "All",
            SavedView::Recent => "Recent",
            SavedView::Frequent => "Frequently Viewed",
        }
    }

    pub fn includes(&self, snapshot: &SavedPropertySnapshot, now: DateTime<Utc>) -> bool {
        match self {
            SavedView::All => true,
            SavedView::Recent => {
                now.signed_duration_since(snapshot.saved_at) <= Duration::days(RECENT_DAYS)
            }
            SavedView::Frequent => snapshot.view_count > FREQUENT_VIEWS,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            SavedView::All => SavedView::Recent,
            SavedView::Recent => SavedView::Frequent,
            SavedView::Frequent => SavedView::All,
        }
    }
}

impl fmt::Display for SavedView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SavedView {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(SavedView::All),
            "recent" => Ok(SavedView::Recent),
            "frequent" => Ok(SavedView::Frequent),
            _ => Err(anyhow!("Unknown saved view: '{}' (valid views: all, recent, frequent)", s)),
        }
    }
}

/// Favorite operations over the persisted saved collection
pub struct FavoriteStore<'a, B: StorageBackend> {
    repo: &'a Repository<B>,
}

impl<'a, B: StorageBackend> FavoriteStore<'a, B> {
    pub fn new(repo: &'a Repository<B>) -> Self {
        Self { repo }
    }

    /// Every snapshot in save order
    pub fn list(&self) -> Vec<SavedPropertySnapshot> {
        self.repo.load(&SAVED_PROPERTIES)
    }

    /// Snapshots matching `view`, in save order
    pub fn list_view(&self, view: SavedView, now: DateTime<Utc>) -> Vec<SavedPropertySnapshot> {
        self.list().into_iter().filter(|s| view.includes(s, now)).collect()
    }

    pub fn is_saved(&self, id: &str) -> bool {
        self.list().iter().any(|s| s.id == id)
    }

    /// Snapshot `property` and append it, replacing any earlier snapshot of the same id
    pub fn save(&self, property: &Property, now: DateTime<Utc>) -> Result<()> {
        let snapshot = SavedPropertySnapshot::from_property(property, now);
        self.repo.update(&SAVED_PROPERTIES, |saved| {
            saved.retain(|s| s.id != snapshot.id);
            saved.push(snapshot);
        })?;

        info!(id = %property.id, "Saved property");
        Ok(())
    }

    /// Drop the snapshot for `id`. Returns whether one existed; a missing id writes nothing.
    pub fn unsave(&self, id: &str) -> Result<bool> {
        let mut saved = self.list();
        let before = saved.len();
        saved.retain(|s| s.id != id);
        if saved.len() == before {
            return Ok(false);
        }

        self.repo.save(&SAVED_PROPERTIES, &saved)?;
        info!(id, "Removed saved property");
        Ok(true)
    }

    /// Flip the saved state of `property` and confirm through `host`. Returns the new state.
    pub fn toggle_saved(&self, property: &Property, host: &mut dyn Host) -> Result<bool> {
        self.toggle_saved_at(property, Utc::now(), host)
    }

    pub fn toggle_saved_at(
        &self,
        property: &Property,
        now: DateTime<Utc>,
        host: &mut dyn Host,
    ) -> Result<bool> {
        if self.is_saved(&property.id) {
            self.unsave(&property.id)?;
            host.notify(REMOVED_MESSAGE, MessageKind::Success);
            Ok(false)
        } else {
            self.save(property, now)?;
            host.notify(ADDED_MESSAGE, MessageKind::Success);
            Ok(true)
        }
    }

    /// Count a detail-page visit of a saved property. Unsaved ids are ignored.
    pub fn record_view(&self, id: &str) -> Result<Option<u32>> {
        let mut saved = self.list();
        let Some(snapshot) = saved.iter_mut().find(|s| s.id == id) else {
            return Ok(None);
        };

        snapshot.view_count = snapshot.view_count.saturating_add(1);
        let count = snapshot.view_count;
        self.repo.save(&SAVED_PROPERTIES, &saved)?;
        Ok(Some(count))
    }
}

/// Copy the link for property `id` and confirm through `host`
pub fn share_property(
    id: &str,
    clipboard: &mut dyn ClipboardProvider,
    host: &mut dyn Host,
) -> Result<()> {
    copy_with_provider(&Route::property(id).path(), clipboard)?;
    host.notify(LINK_COPIED_MESSAGE, MessageKind::Success);
    Ok(())
}
