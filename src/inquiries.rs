//! The contact form on the property detail page and the inquiry log it appends to.
//!
//! A valid submission is persisted immediately as a `pending` [`Inquiry`]. The confirmation
//! toast and form reset follow after a simulated network delay, which is cancelled if the
//! user leaves the page first.

use std::time::{Duration, Instant};

use chrono::{DateTime, Local, NaiveDate, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::SubmitError;
use crate::host::{Host, MessageKind};
use crate::models::{Inquiry, InquiryStatus, Property};
use crate::storage::{INQUIRIES, Repository, StorageBackend};
use crate::tasks::SimulatedTask;
use crate::validation::{
    FORM_ERROR_MESSAGE, Validate, ValidationErrors, digit_count, is_valid_email,
};

pub const SENT_MESSAGE: &str = "Viewing request sent! We'll contact you shortly.";

const MIN_NAME_CHARS: usize = 2;
const MIN_PHONE_DIGITS: usize = 10;

/// Editable contact form fields, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Message,
    Date,
}

impl ContactField {
    pub const ALL: [ContactField; 5] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Message,
        ContactField::Date,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Message => "message",
            ContactField::Date => "date",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Full Name",
            ContactField::Email => "Email",
            ContactField::Phone => "Phone",
            ContactField::Message => "Message (optional)",
            ContactField::Date => "Preferred Date (today, tomorrow, YYYY-MM-DD)",
        }
    }
}

/// Raw contact form input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub date: String,
}

impl ContactForm {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Message => &self.message,
            ContactField::Date => &self.date,
        }
    }

    pub fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Message => &mut self.message,
            ContactField::Date => &mut self.date,
        }
    }

    /// Check every field, resolving relative dates against `today`
    pub fn validate_on(&self, today: NaiveDate) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.name.trim().chars().count() < MIN_NAME_CHARS {
            errors.add("name", "Name must be at least 2 characters");
        }
        if !is_valid_email(&self.email) {
            errors.add("email", "Please enter a valid email address");
        }
        if digit_count(&self.phone) < MIN_PHONE_DIGITS {
            errors.add("phone", "Phone number must have at least 10 digits");
        }
        if let Err(message) = resolve_date(&self.date, today) {
            errors.add("date", message);
        }

        errors.into_result()
    }

    /// Build the inquiry this form describes. The form must already be valid.
    fn to_inquiry(
        &self,
        property: &Property,
        submitted_at: DateTime<Utc>,
        today: NaiveDate,
    ) -> Inquiry {
        let message = self.message.trim();
        Inquiry {
            id: Uuid::now_v7().to_string(),
            property_id: property.id.clone(),
            property_title: property.title.clone(),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            message: (!message.is_empty()).then(|| message.to_string()),
            date: resolve_date(&self.date, today).ok().flatten(),
            submitted_at,
            status: InquiryStatus::Pending,
        }
    }
}

impl Validate for ContactForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        self.validate_on(Local::now().date_naive())
    }
}

/// `today`, `tomorrow` or an ISO date that is not in the past. Blank means no preference.
pub fn resolve_date(input: &str, today: NaiveDate) -> Result<Option<NaiveDate>, String> {
    let input = input.trim();
    match input.to_lowercase().as_str() {
        "" => Ok(None),
        "today" => Ok(Some(today)),
        "tomorrow" => Ok(today.succ_opt()),
        _ => {
            let date = NaiveDate::parse_from_str(input, "%Y-%m-%d")
                .map_err(|_| "Use today, tomorrow or a YYYY-MM-DD date".to_string())?;
            if date < today {
                return Err("Please choose today or a later date".to_string());
            }
            Ok(Some(date))
        }
    }
}

/// Read access to the inquiry log plus the append performed by a submission
pub struct InquiryBook<'a, B: StorageBackend> {
    repo: &'a Repository<B>,
}

impl<'a, B: StorageBackend> InquiryBook<'a, B> {
    pub fn new(repo: &'a Repository<B>) -> Self {
        Self { repo }
    }

    /// Every inquiry in submission order
    pub fn list(&self) -> Vec<Inquiry> {
        self.repo.load(&INQUIRIES)
    }

    pub fn for_property(&self, property_id: &str) -> Vec<Inquiry> {
        self.list().into_iter().filter(|i| i.property_id == property_id).collect()
    }

    /// Validate `form` and append one pending inquiry. Nothing is written when invalid.
    pub fn submit(
        &self,
        form: &ContactForm,
        property: &Property,
        submitted_at: DateTime<Utc>,
        today: NaiveDate,
    ) -> Result<Inquiry, SubmitError> {
        form.validate_on(today)?;

        let inquiry = form.to_inquiry(property, submitted_at, today);
        let stored = inquiry.clone();
        self.repo.update(&INQUIRIES, |inquiries| inquiries.push(stored))?;

        info!(id = %inquiry.id, property = %property.id, "Recorded inquiry");
        Ok(inquiry)
    }
}

/// Contact form as shown on the detail page: input, field errors and the in-flight request
#[derive(Debug)]
pub struct ContactFlow {
    pub form: ContactForm,
    pub errors: ValidationErrors,
    delay: Duration,
    pending: Option<SimulatedTask<()>>,
}

impl ContactFlow {
    pub fn new(delay: Duration) -> Self {
        Self { form: ContactForm::default(), errors: ValidationErrors::new(), delay, pending: None }
    }

    pub fn is_submitting(&self) -> bool {
        self.pending.as_ref().is_some_and(SimulatedTask::is_pending)
    }

    /// Submit the form. Invalid input records field errors and shows the form error toast.
    pub fn submit<B: StorageBackend>(
        &mut self,
        repo: &Repository<B>,
        property: &Property,
        host: &mut dyn Host,
        now: Instant,
    ) -> Result<Inquiry, SubmitError> {
        if self.is_submitting() {
            return Err(SubmitError::InProgress);
        }

        let book = InquiryBook::new(repo);
        match book.submit(&self.form, property, Utc::now(), Local::now().date_naive()) {
            Ok(inquiry) => {
                self.errors = ValidationErrors::new();
                self.pending = Some(SimulatedTask::start((), self.delay, now));
                debug!(delay_ms = self.delay.as_millis() as u64, "Contact request in flight");
                Ok(inquiry)
            }
            Err(SubmitError::Invalid(errors)) => {
                self.errors = errors.clone();
                host.notify(FORM_ERROR_MESSAGE, MessageKind::Error);
                Err(SubmitError::Invalid(errors))
            }
            Err(e) => Err(e),
        }
    }

    /// Deliver the confirmation once the simulated delay has passed. Returns whether it fired.
    pub fn poll(&mut self, now: Instant, host: &mut dyn Host) -> bool {
        let delivered = self.pending.as_mut().and_then(|task| task.poll(now)).is_some();
        if delivered {
            self.finish(host);
        }
        delivered
    }

    /// Block until the simulated delay has passed, then confirm
    pub fn wait(&mut self, host: &mut dyn Host) {
        if let Some(task) = self.pending.take()
            && task.wait().is_some()
        {
            self.finish(host);
        }
    }

    /// Drop the in-flight request's confirmation, e.g. on navigation
    pub fn cancel(&mut self) {
        if let Some(task) = self.pending.as_mut() {
            task.cancel();
        }
        self.pending = None;
    }

    fn finish(&mut self, host: &mut dyn Host) {
        self.pending = None;
        self.form = ContactForm::default();
        self.errors = ValidationErrors::new();
        host.notify(SENT_MESSAGE, MessageKind::Success);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::host::RecordingHost;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "(555) 123-4567".to_string(),
            message: String::new(),
            date: "tomorrow".to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        assert!(valid_form().validate_on(today()).is_ok());
    }

    #[test]
    fn test_field_errors() {
        let form = ContactForm {
            name: "J".to_string(),
            email: "jane".to_string(),
            phone: "123".to_string(),
            message: String::new(),
            date: "someday".to_string(),
        };
        let errors = form.validate_on(today()).unwrap_err();

        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get("name"), Some("Name must be at least 2 characters"));
        assert_eq!(errors.get("email"), Some("Please enter a valid email address"));
        assert_eq!(errors.get("phone"), Some("Phone number must have at least 10 digits"));
        assert!(errors.get("date").is_some());
    }

    #[test]
    fn test_resolve_date() {
        let tomorrow = NaiveDate::from_ymd_opt(2025, 3, 2).unwrap();
        assert_eq!(resolve_date("", today()), Ok(None));
        assert_eq!(resolve_date("Today", today()), Ok(Some(today())));
        assert_eq!(resolve_date("tomorrow", today()), Ok(Some(tomorrow)));
        assert_eq!(resolve_date("2025-03-02", today()), Ok(Some(tomorrow)));
        assert!(resolve_date("2025-02-28", today()).is_err());
        assert!(resolve_date("03/02/2025", today()).is_err());
    }

    #[test]
    fn test_short_phone_rejected_nothing_stored() {
        let repo = Repository::in_memory();
        let catalog = Catalog::builtin().unwrap();
        let book = InquiryBook::new(&repo);
        let form = ContactForm { phone: "123".to_string(), ..valid_form() };

        let err = book.submit(&form, catalog.find("prop-1").unwrap(), Utc::now(), today());

        let errors = err.unwrap_err();
        assert!(errors.validation().and_then(|e| e.get("phone")).is_some());
        assert!(book.list().is_empty());
        assert_eq!(repo.backend().raw("propertyInquiries"), None);
    }

    #[test]
    fn test_valid_submission_appends_one_pending() {
        let repo = Repository::in_memory();
        let catalog = Catalog::builtin().unwrap();
        let book = InquiryBook::new(&repo);
        let property = catalog.find("prop-4").unwrap();

        let inquiry = book.submit(&valid_form(), property, Utc::now(), today()).unwrap();

        let stored = book.list();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0], inquiry);
        assert_eq!(inquiry.status, InquiryStatus::Pending);
        assert_eq!(inquiry.property_title, "Historic Brownstone");
        assert_eq!(inquiry.message, None);
        assert_eq!(inquiry.date, NaiveDate::from_ymd_opt(2025, 3, 2));
        assert_eq!(book.for_property("prop-4").len(), 1);
        assert!(book.for_property("prop-1").is_empty());
    }

    #[test]
    fn test_flow_confirms_after_delay_and_resets() {
        let repo = Repository::in_memory();
        let catalog = Catalog::builtin().unwrap();
        let mut host = RecordingHost::new();
        let mut flow = ContactFlow::new(Duration::from_millis(1000));
        flow.form = ContactForm { date: String::new(), ..valid_form() };
        let start = Instant::now();

        flow.submit(&repo, catalog.find("prop-1").unwrap(), &mut host, start).unwrap();
        assert!(flow.is_submitting());
        assert!(!flow.poll(start + Duration::from_millis(500), &mut host));
        assert!(host.notifications.is_empty());

        assert!(flow.poll(start + Duration::from_millis(1000), &mut host));
        assert_eq!(host.last_notification().unwrap().text, SENT_MESSAGE);
        assert_eq!(flow.form, ContactForm::default());
        assert_eq!(InquiryBook::new(&repo).list().len(), 1);
    }

    #[test]
    fn test_flow_invalid_shows_form_error() {
        let repo = Repository::in_memory();
        let catalog = Catalog::builtin().unwrap();
        let mut host = RecordingHost::new();
        let mut flow = ContactFlow::new(Duration::ZERO);
        flow.form.phone = "123".to_string();

        let result = flow.submit(&repo, catalog.find("prop-1").unwrap(), &mut host, Instant::now());

        assert!(matches!(result, Err(SubmitError::Invalid(_))));
        assert!(flow.errors.get("phone").is_some());
        assert_eq!(host.last_notification().unwrap().text, FORM_ERROR_MESSAGE);
        assert_eq!(host.last_notification().unwrap().kind, MessageKind::Error);
        assert!(!flow.is_submitting());
    }

    #[test]
    fn test_flow_cancel_suppresses_confirmation() {
        let repo = Repository::in_memory();
        let catalog = Catalog::builtin().unwrap();
        let mut host = RecordingHost::new();
        let mut flow = ContactFlow::new(Duration::from_millis(10));
        flow.form = ContactForm { date: String::new(), ..valid_form() };
        let start = Instant::now();

        flow.submit(&repo, catalog.find("prop-1").unwrap(), &mut host, start).unwrap();
        flow.cancel();

        assert!(!flow.poll(start + Duration::from_secs(5), &mut host));
        assert!(host.notifications.is_empty());
        // The inquiry itself was already recorded
        assert_eq!(InquiryBook::new(&repo).list().len(), 1);
    }
}
