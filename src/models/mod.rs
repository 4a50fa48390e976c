//! Data models for the property catalog and the locally persisted collections.
//!
//! - [`Property`] - Read-only catalog entry
//! - [`SavedPropertySnapshot`] - Point-in-time copy of a favorited property
//! - [`Inquiry`] - Viewing request from the contact form
//! - [`UserListing`] - Property authored through the listing wizard
//! - [`UserPreferences`] - Onboarding answers
//!
//! Persisted records serialize with camelCase field names.

pub mod inquiry;
pub mod listing;
pub mod preferences;
pub mod property;
pub mod saved;

pub use inquiry::{Inquiry, InquiryStatus};
pub use listing::{CURRENT_USER, ListingStatus, UserListing};
pub use preferences::UserPreferences;
pub use property::{Property, PropertyType};
pub use saved::SavedPropertySnapshot;
