//! Login and signup forms. There is no account backend: a form that validates is accepted.

use tracing::debug;

use crate::host::{Host, MessageKind};
use crate::routes::Route;
use crate::validation::{Validate, ValidationErrors, is_valid_email};

pub const WELCOME_BACK_MESSAGE: &str = "Welcome back!";
pub const ACCOUNT_CREATED_MESSAGE: &str = "Account created successfully!";
pub const PASSWORD_MISMATCH_MESSAGE: &str = "Passwords do not match";

const MIN_PASSWORD_CHARS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

/// Which password rules a candidate satisfies, shown live as a checklist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordRequirements {
    pub min_length: bool,
    pub uppercase: bool,
    pub digit: bool,
    pub matches: bool,
}

impl PasswordRequirements {
    pub fn check(password: &str, confirmation: &str) -> Self {
        Self {
            min_length: password.chars().count() >= MIN_PASSWORD_CHARS,
            uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            digit: password.chars().any(|c| c.is_ascii_digit()),
            matches: !password.is_empty() && password == confirmation,
        }
    }

    pub fn all_met(&self) -> bool {
        self.min_length && self.uppercase && self.digit && self.matches
    }

    /// Checklist rows in display order
    pub fn items(&self) -> [(&'static str, bool); 4] {
        [
            ("At least 8 characters", self.min_length),
            ("At least one uppercase letter", self.uppercase),
            ("At least one number", self.digit),
            ("Passwords match", self.matches),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl Validate for LoginForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("email", &self.email, "Email is required");
        errors.require("password", &self.password, "Password is required");
        errors.into_result()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    pub fn requirements(&self) -> PasswordRequirements {
        PasswordRequirements::check(&self.password, &self.confirm_password)
    }
}

impl Validate for SignupForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if !is_valid_email(&self.email) {
            errors.add("email", "Please enter a valid email address");
        }

        let requirements = self.requirements();
        if !requirements.matches {
            errors.add("confirmPassword", PASSWORD_MISMATCH_MESSAGE);
        }
        if !(requirements.min_length && requirements.uppercase && requirements.digit) {
            errors.add("password", "Password does not meet the requirements");
        }
        errors.into_result()
    }
}

/// Accept a login: "Welcome back!" and home
pub fn login(form: &LoginForm, host: &mut dyn Host) -> Result<(), ValidationErrors> {
    if let Err(errors) = form.validate() {
        if let Some(first) = errors.iter().next() {
            host.notify(&first.message, MessageKind::Error);
        }
        return Err(errors);
    }

    debug!("Login accepted");
    host.notify(WELCOME_BACK_MESSAGE, MessageKind::Success);
    host.navigate(Route::Home);
    Ok(())
}

/// Accept a signup once every password rule holds, then continue to onboarding
pub fn signup(form: &SignupForm, host: &mut dyn Host) -> Result<(), ValidationErrors> {
    if let Err(errors) = form.validate() {
        let message = errors
            .get("confirmPassword")
            .or_else(|| errors.iter().next().map(|e| e.message.as_str()));
        if let Some(message) = message {
            host.notify(message, MessageKind::Error);
        }
        return Err(errors);
    }

    debug!("Signup accepted");
    host.notify(ACCOUNT_CREATED_MESSAGE, MessageKind::Success);
    host.navigate(Route::Onboarding);
    Ok(())
}

/// Skip authentication entirely
pub fn continue_as_guest(host: &mut dyn Host) {
    host.navigate(Route::Home);
}
