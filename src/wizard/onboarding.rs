//! Five-step onboarding wizard collecting search preferences.
//!
//! Steps are linear with Next/Back; the first step needs at least one property type.
//! Completing overwrites the stored preferences and sends the user to explore.

use anyhow::{Result, bail};
use tracing::info;

use crate::host::{Host, MessageKind};
use crate::models::preferences::{BUDGET_MAX, BUDGET_MIN, BUDGET_STEP, ROOMS_MAX, ROOMS_MIN};
use crate::models::{PropertyType, UserPreferences};
use crate::routes::Route;
use crate::storage::{PREFERENCES, Repository, StorageBackend};

pub const PREFERENCES_SAVED_MESSAGE: &str = "Preferences saved! Welcome to Airben Be!";
pub const TYPE_REQUIRED_MESSAGE: &str = "Select at least one property type to continue";

/// Feature tags offered on the last step
pub const PREFERENCE_FEATURES: [&str; 10] = [
    "Swimming Pool",
    "Gym",
    "Parking",
    "Garden",
    "Balcony",
    "Air Conditioning",
    "Fireplace",
    "Pet Friendly",
    "Security",
    "Elevator",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingStep {
    PropertyTypes,
    Budget,
    Location,
    Rooms,
    Features,
}

impl OnboardingStep {
    pub const ALL: [OnboardingStep; 5] = [
        OnboardingStep::PropertyTypes,
        OnboardingStep::Budget,
        OnboardingStep::Location,
        OnboardingStep::Rooms,
        OnboardingStep::Features,
    ];

    /// 1-based position
    pub fn number(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).map_or(1, |idx| idx + 1)
    }

    pub fn title(&self) -> &'static str {
        match self {
            OnboardingStep::PropertyTypes => "What type of property are you looking for?",
            OnboardingStep::Budget => "What's your budget range?",
            OnboardingStep::Location => "Preferred location",
            OnboardingStep::Rooms => "Bedrooms & Bathrooms",
            OnboardingStep::Features => "Desired features",
        }
    }

    fn next(&self) -> Option<Self> {
        Self::ALL.get(self.number()).copied()
    }

    fn previous(&self) -> Option<Self> {
        self.number().checked_sub(2).and_then(|idx| Self::ALL.get(idx).copied())
    }
}

#[derive(Debug, Clone)]
pub struct OnboardingWizard {
    step: OnboardingStep,
    preferences: UserPreferences,
}

impl Default for OnboardingWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl OnboardingWizard {
    pub fn new() -> Self {
        Self::with_preferences(UserPreferences::default())
    }

    /// Start from previously stored preferences
    pub fn with_preferences(preferences: UserPreferences) -> Self {
        Self { step: OnboardingStep::PropertyTypes, preferences }
    }

    pub fn step(&self) -> OnboardingStep {
        self.step
    }

    pub fn preferences(&self) -> &UserPreferences {
        &self.preferences
    }

    pub fn is_last_step(&self) -> bool {
        self.step.next().is_none()
    }

    pub fn can_advance(&self) -> bool {
        match self.step {
            OnboardingStep::PropertyTypes => !self.preferences.property_types.is_empty(),
            _ => !self.is_last_step(),
        }
    }

    /// Move forward one step. Returns false when the current step blocks it.
    pub fn next(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        match self.step.next() {
            Some(step) => {
                self.step = step;
                true
            }
            None => false,
        }
    }

    pub fn back(&mut self) -> bool {
        match self.step.previous() {
            Some(step) => {
                self.step = step;
                true
            }
            None => false,
        }
    }

    pub fn toggle_type(&mut self, property_type: PropertyType) {
        let types = &mut self.preferences.property_types;
        if let Some(idx) = types.iter().position(|t| *t == property_type) {
            types.remove(idx);
        } else {
            types.push(property_type);
        }
    }

    /// Set the budget, clamped to the slider range and snapped down to its step
    pub fn set_budget(&mut self, budget: u64) {
        let clamped = budget.clamp(BUDGET_MIN, BUDGET_MAX);
        self.preferences.budget = BUDGET_MIN + (clamped - BUDGET_MIN) / BUDGET_STEP * BUDGET_STEP;
    }

    /// Move the budget by `steps` slider increments
    pub fn adjust_budget(&mut self, steps: i64) {
        let delta = steps.unsigned_abs().saturating_mul(BUDGET_STEP);
        let budget = if steps < 0 {
            self.preferences.budget.saturating_sub(delta)
        } else {
            self.preferences.budget.saturating_add(delta)
        };
        self.set_budget(budget);
    }

    pub fn location_mut(&mut self) -> &mut String {
        &mut self.preferences.location
    }

    pub fn adjust_bedrooms(&mut self, delta: i8) {
        self.preferences.bedrooms = adjust_rooms(self.preferences.bedrooms, delta);
    }

    pub fn adjust_bathrooms(&mut self, delta: i8) {
        self.preferences.bathrooms = adjust_rooms(self.preferences.bathrooms, delta);
    }

    pub fn toggle_feature(&mut self, tag: &str) {
        let features = &mut self.preferences.features;
        if let Some(idx) = features.iter().position(|f| f == tag) {
            features.remove(idx);
        } else {
            features.push(tag.to_string());
        }
    }

    /// Persist the preferences (overwriting any earlier ones) and navigate to explore
    pub fn complete<B: StorageBackend>(
        &mut self,
        repo: &Repository<B>,
        host: &mut dyn Host,
    ) -> Result<()> {
        if !self.is_last_step() {
            bail!("Onboarding can only be completed from the final step");
        }

        let mut preferences = self.preferences.clone();
        preferences.location = preferences.location.trim().to_string();
        repo.save(&PREFERENCES, &Some(preferences))?;
        info!(types = self.preferences.property_types.len(), "Saved onboarding preferences");

        host.notify(PREFERENCES_SAVED_MESSAGE, MessageKind::Success);
        host.navigate(Route::explore(""));
        Ok(())
    }
}

fn adjust_rooms(current: u8, delta: i8) -> u8 {
    current.saturating_add_signed(delta).clamp(ROOMS_MIN, ROOMS_MAX)
}

/// Preferences saved by a completed onboarding, if any
pub fn stored_preferences<B: StorageBackend>(repo: &Repository<B>) -> Option<UserPreferences> {
    repo.load(&PREFERENCES)
}
