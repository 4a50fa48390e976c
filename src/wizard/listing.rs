//! Listing-creation wizard.
//!
//! ```text
//! CollectingPhotos ──start_analysis──▶ Analyzing ──(delay)──▶ DetailsForm ──submit──▶ Submitted
//!        │                                                        ▲
//!        └────────────────────── skip_analysis ───────────────────┘
//! ```
//!
//! Analysis is a fixed delay that fills in canned details; there is no image processing.

use std::time::{Duration, Instant};

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{SubmitError, WizardError};
use crate::host::{Host, MessageKind};
use crate::models::{CURRENT_USER, ListingStatus, PropertyType, UserListing};
use crate::routes::Route;
use crate::storage::{Repository, StorageBackend, USER_LISTINGS};
use crate::tasks::SimulatedTask;
use crate::utils::format::parse_amount;
use crate::validation::{FORM_ERROR_MESSAGE, Validate, ValidationErrors};

pub const LISTED_MESSAGE: &str = "Property listed successfully!";
pub const ANALYSIS_COMPLETE_MESSAGE: &str =
    "AI analysis complete! Property details have been generated.";

/// Feature tags offered on the details form
pub const LISTING_FEATURES: [&str; 14] = [
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
    "Laundry",
    "Dishwasher",
    "Hardwood Floors",
    "Updated Kitchen",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingStep {
    CollectingPhotos,
    Analyzing,
    DetailsForm,
    Submitted,
}

impl ListingStep {
    pub fn label(&self) -> &'static str {
        match self {
            ListingStep::CollectingPhotos => "collecting photos",
            ListingStep::Analyzing => "analyzing",
            ListingStep::DetailsForm => "editing details",
            ListingStep::Submitted => "submitted",
        }
    }
}

/// Details produced by the simulated photo analysis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    pub title: String,
    pub description: String,
    pub sqft: String,
    pub features: Vec<String>,
}

impl AnalysisResult {
    /// The fixed result every analysis returns
    pub fn canned() -> Self {
        Self {
            title: "Beautiful Modern Home with Updated Kitchen".to_string(),
            description: "This stunning property features an open floor plan with hardwood \
                          floors throughout, a gourmet kitchen with stainless steel appliances, \
                          and a spacious master suite. The backyard offers a private oasis with \
                          mature landscaping."
                .to_string(),
            sqft: "2,450".to_string(),
            features: ["Updated Kitchen", "Hardwood Floors", "Garden", "Air Conditioning"]
                .map(String::from)
                .to_vec(),
        }
    }
}

/// Text fields of the details form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingField {
    Title,
    Description,
    Price,
    Bedrooms,
    Bathrooms,
    Sqft,
    Address,
    City,
    State,
    ZipCode,
}

impl ListingField {
    pub const ALL: [ListingField; 10] = [
        ListingField::Title,
        ListingField::Description,
        ListingField::Price,
        ListingField::Bedrooms,
        ListingField::Bathrooms,
        ListingField::Sqft,
        ListingField::Address,
        ListingField::City,
        ListingField::State,
        ListingField::ZipCode,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ListingField::Title => "title",
            ListingField::Description => "description",
            ListingField::Price => "price",
            ListingField::Bedrooms => "bedrooms",
            ListingField::Bathrooms => "bathrooms",
            ListingField::Sqft => "sqft",
            ListingField::Address => "address",
            ListingField::City => "city",
            ListingField::State => "state",
            ListingField::ZipCode => "zipCode",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ListingField::Title => "Property Title",
            ListingField::Description => "Description",
            ListingField::Price => "Price ($)",
            ListingField::Bedrooms => "Bedrooms",
            ListingField::Bathrooms => "Bathrooms",
            ListingField::Sqft => "Square Feet",
            ListingField::Address => "Street Address",
            ListingField::City => "City",
            ListingField::State => "State",
            ListingField::ZipCode => "ZIP Code",
        }
    }
}

/// Everything entered so far. All numeric fields stay text until submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingDraft {
    pub title: String,
    pub description: String,
    pub property_type: Option<PropertyType>,
    pub price: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub sqft: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub features: Vec<String>,
    pub images: Vec<String>,
}

impl ListingDraft {
    pub fn field(&self, field: ListingField) -> &str {
        match field {
            ListingField::Title => &self.title,
            ListingField::Description => &self.description,
            ListingField::Price => &self.price,
            ListingField::Bedrooms => &self.bedrooms,
            ListingField::Bathrooms => &self.bathrooms,
            ListingField::Sqft => &self.sqft,
            ListingField::Address => &self.address,
            ListingField::City => &self.city,
            ListingField::State => &self.state,
            ListingField::ZipCode => &self.zip_code,
        }
    }

    pub fn field_mut(&mut self, field: ListingField) -> &mut String {
        match field {
            ListingField::Title => &mut self.title,
            ListingField::Description => &mut self.description,
            ListingField::Price => &mut self.price,
            ListingField::Bedrooms => &mut self.bedrooms,
            ListingField::Bathrooms => &mut self.bathrooms,
            ListingField::Sqft => &mut self.sqft,
            ListingField::Address => &mut self.address,
            ListingField::City => &mut self.city,
            ListingField::State => &mut self.state,
            ListingField::ZipCode => &mut self.zip_code,
        }
    }

    pub fn has_feature(&self, tag: &str) -> bool {
        self.features.iter().any(|f| f == tag)
    }

    /// Overwrite title, description and area; union the features
    fn merge(&mut self, analysis: AnalysisResult) {
        self.title = analysis.title;
        self.description = analysis.description;
        self.sqft = analysis.sqft;
        for tag in analysis.features {
            if !self.has_feature(&tag) {
                self.features.push(tag);
            }
        }
    }

    /// Parse the draft into a listing owned by the current user
    fn to_listing(&self) -> Result<UserListing, ValidationErrors> {
        self.validate()?;

        let mut errors = ValidationErrors::new();
        let price = parse_amount(&self.price)
            .map_err(|_| errors.add("price", "Price must be a whole number"))
            .ok();
        let beds = self
            .bedrooms
            .trim()
            .parse::<u32>()
            .map_err(|_| errors.add("bedrooms", "Bedrooms must be a whole number"))
            .ok();
        let baths = self
            .bathrooms
            .trim()
            .parse::<f32>()
            .ok()
            .filter(|b| b.is_finite() && *b >= 0.0)
            .or_else(|| {
                errors.add("bathrooms", "Bathrooms must be a number");
                None
            });
        let sqft = if self.sqft.trim().is_empty() {
            Some(0)
        } else {
            parse_amount(&self.sqft)
                .ok()
                .and_then(|v| u32::try_from(v).ok())
                .or_else(|| {
                    errors.add("sqft", "Square feet must be a whole number");
                    None
                })
        };

        let (Some(price), Some(beds), Some(baths), Some(sqft)) = (price, beds, baths, sqft) else {
            return Err(errors);
        };

        let address = self.address.trim().to_string();
        let city = self.city.trim().to_string();
        let state = self.state.trim().to_string();
        Ok(UserListing {
            id: Uuid::now_v7().to_string(),
            user_id: CURRENT_USER.to_string(),
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            property_type: self.property_type,
            price,
            beds,
            baths,
            sqft,
            location: format!("{}, {}", city, state),
            address,
            city,
            state,
            zip_code: self.zip_code.trim().to_string(),
            images: self.images.clone(),
            features: self.features.clone(),
            is_new: true,
            is_featured: false,
            status: ListingStatus::Active,
            views: 0,
            created_at: Utc::now(),
        })
    }
}

impl Validate for ListingDraft {
    /// Required fields only; numeric parsing is checked at submission
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("title", &self.title, "Title is required");
        errors.require("price", &self.price, "Price is required");
        errors.require("bedrooms", &self.bedrooms, "Bedrooms is required");
        errors.require("bathrooms", &self.bathrooms, "Bathrooms is required");
        errors.require("address", &self.address, "Address is required");
        errors.require("city", &self.city, "City is required");
        errors.require("state", &self.state, "State is required");
        errors.require("zipCode", &self.zip_code, "ZIP code is required");
        errors.into_result()
    }
}

/// The listing wizard's state machine
#[derive(Debug)]
pub struct ListingWizard {
    step: ListingStep,
    draft: ListingDraft,
    errors: ValidationErrors,
    analysis: Option<SimulatedTask<AnalysisResult>>,
    analysis_delay: Duration,
}

impl ListingWizard {
    pub fn new(analysis_delay: Duration) -> Self {
        Self {
            step: ListingStep::CollectingPhotos,
            draft: ListingDraft::default(),
            errors: ValidationErrors::new(),
            analysis: None,
            analysis_delay,
        }
    }

    pub fn step(&self) -> ListingStep {
        self.step
    }

    pub fn draft(&self) -> &ListingDraft {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    fn expect_step(&self, expected: ListingStep, action: &'static str) -> Result<(), WizardError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(WizardError::WrongState { action, state: self.step.label() })
        }
    }

    /// Attach a photo by path or URL. Blank input is ignored.
    pub fn add_photo(&mut self, photo: &str) -> Result<(), WizardError> {
        self.expect_step(ListingStep::CollectingPhotos, "add photos")?;
        let photo = photo.trim();
        if !photo.is_empty() {
            self.draft.images.push(photo.to_string());
        }
        Ok(())
    }

    pub fn remove_photo(&mut self, index: usize) -> Result<(), WizardError> {
        self.expect_step(ListingStep::CollectingPhotos, "remove photos")?;
        if index < self.draft.images.len() {
            self.draft.images.remove(index);
        }
        Ok(())
    }

    /// Begin the simulated analysis. Refused, with the draft untouched, when no photos exist.
    pub fn start_analysis(
        &mut self,
        host: &mut dyn Host,
        now: Instant,
    ) -> Result<(), WizardError> {
        self.expect_step(ListingStep::CollectingPhotos, "start analysis")?;
        if self.draft.images.is_empty() {
            let err = WizardError::NoImages;
            host.notify(&err.to_string(), MessageKind::Error);
            return Err(err);
        }

        let task = SimulatedTask::start(AnalysisResult::canned(), self.analysis_delay, now);
        self.analysis = Some(task);
        self.step = ListingStep::Analyzing;
        debug!(images = self.draft.images.len(), "Listing analysis started");
        Ok(())
    }

    /// Go straight to the details form without analysis
    pub fn skip_analysis(&mut self) -> Result<(), WizardError> {
        self.expect_step(ListingStep::CollectingPhotos, "skip analysis")?;
        self.step = ListingStep::DetailsForm;
        Ok(())
    }

    /// Apply the analysis result once its delay has passed. Returns whether it did.
    pub fn poll(&mut self, now: Instant, host: &mut dyn Host) -> bool {
        if self.step != ListingStep::Analyzing {
            return false;
        }
        let Some(result) = self.analysis.as_mut().and_then(|task| task.poll(now)) else {
            return false;
        };

        self.analysis = None;
        self.draft.merge(result);
        self.step = ListingStep::DetailsForm;
        host.notify(ANALYSIS_COMPLETE_MESSAGE, MessageKind::Success);
        debug!("Listing analysis applied");
        true
    }

    pub fn is_analyzing(&self) -> bool {
        self.step == ListingStep::Analyzing
    }

    /// Abandon a running analysis. The wizard returns to photo collection.
    pub fn cancel(&mut self) {
        if let Some(task) = self.analysis.as_mut() {
            task.cancel();
        }
        self.analysis = None;
        if self.step == ListingStep::Analyzing {
            self.step = ListingStep::CollectingPhotos;
        }
    }

    /// Mutable access to a text field while on the details form
    pub fn field_mut(&mut self, field: ListingField) -> Option<&mut String> {
        (self.step == ListingStep::DetailsForm).then(|| self.draft.field_mut(field))
    }

    pub fn set_field(&mut self, field: ListingField, value: &str) -> Result<(), WizardError> {
        self.expect_step(ListingStep::DetailsForm, "edit details")?;
        *self.draft.field_mut(field) = value.to_string();
        Ok(())
    }

    pub fn set_property_type(
        &mut self,
        property_type: Option<PropertyType>,
    ) -> Result<(), WizardError> {
        self.expect_step(ListingStep::DetailsForm, "edit details")?;
        self.draft.property_type = property_type;
        Ok(())
    }

    /// Step through the property types, wrapping back to unset
    pub fn cycle_property_type(&mut self) -> Result<(), WizardError> {
        let next = match self.draft.property_type {
            None => Some(PropertyType::ALL[0]),
            Some(current) => {
                let idx = PropertyType::ALL.iter().position(|t| *t == current).unwrap_or(0);
                PropertyType::ALL.get(idx + 1).copied()
            }
        };
        self.set_property_type(next)
    }

    pub fn toggle_feature(&mut self, tag: &str) -> Result<(), WizardError> {
        self.expect_step(ListingStep::DetailsForm, "edit details")?;
        if self.draft.has_feature(tag) {
            self.draft.features.retain(|f| f != tag);
        } else {
            self.draft.features.push(tag.to_string());
        }
        Ok(())
    }

    /// Validate and append the listing, then confirm and navigate to the profile.
    ///
    /// On invalid input the wizard stays on the details form with field errors recorded.
    pub fn submit<B: StorageBackend>(
        &mut self,
        repo: &Repository<B>,
        host: &mut dyn Host,
    ) -> Result<UserListing, SubmitError> {
        self.expect_step(ListingStep::DetailsForm, "submit")?;

        let listing = match self.draft.to_listing() {
            Ok(listing) => listing,
            Err(errors) => {
                self.errors = errors.clone();
                host.notify(FORM_ERROR_MESSAGE, MessageKind::Error);
                return Err(errors.into());
            }
        };

        let stored = listing.clone();
        repo.update(&USER_LISTINGS, |listings| listings.push(stored))?;
        info!(id = %listing.id, title = %listing.title, "Listed property");

        self.errors = ValidationErrors::new();
        self.step = ListingStep::Submitted;
        host.notify(LISTED_MESSAGE, MessageKind::Success);
        host.navigate(Route::Profile);
        Ok(listing)
    }
}

/// Listings owned by the current user, in creation order
pub fn my_listings<B: StorageBackend>(repo: &Repository<B>) -> Vec<UserListing> {
    repo.load(&USER_LISTINGS).into_iter().filter(|l| l.user_id == CURRENT_USER).collect()
}
