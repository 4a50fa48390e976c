//! Typed storage keys. Each key is bound to exactly one document type.

use std::marker::PhantomData;

use crate::models::{Inquiry, SavedPropertySnapshot, UserListing, UserPreferences};

/// A storage key bound to the document type `T` stored under it
#[derive(Debug)]
pub struct StoreKey<T> {
    name: &'static str,
    _document: PhantomData<fn() -> T>,
}

impl<T> StoreKey<T> {
    pub const fn new(name: &'static str) -> Self {
        Self { name, _document: PhantomData }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<T> Clone for StoreKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for StoreKey<T> {}

pub const SAVED_PROPERTIES: StoreKey<Vec<SavedPropertySnapshot>> = StoreKey::new("savedProperties");
pub const INQUIRIES: StoreKey<Vec<Inquiry>> = StoreKey::new("propertyInquiries");
pub const USER_LISTINGS: StoreKey<Vec<UserListing>> = StoreKey::new("userProperties");
pub const PREFERENCES: StoreKey<Option<UserPreferences>> = StoreKey::new("userPreferences");
