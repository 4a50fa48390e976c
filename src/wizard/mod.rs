//! Multi-step flows: creating a listing and onboarding preferences

pub mod listing;
pub mod onboarding;

pub use listing::{
    AnalysisResult, LISTING_FEATURES, ListingDraft, ListingField, ListingStep, ListingWizard,
    my_listings,
};
pub use onboarding::{OnboardingStep, OnboardingWizard, PREFERENCE_FEATURES, stored_preferences};
