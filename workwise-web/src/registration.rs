//! Registration form handling
//!
//! The form posts first/last name, email, password (+ confirmation), a
//! barangay, the account type and two consent checkboxes. City is fixed.
//! Every field is checked and all failures are reported together, keyed by
//! field name, so the page can show each message under its input.

use serde::Deserialize;
use workwise_common::db::UserType;
use workwise_common::location::{is_valid_barangay, CITY};

use crate::error::FieldErrors;

pub const MIN_PASSWORD_LENGTH: usize = 8;
const MAX_FIELD_LENGTH: usize = 255;

/// Raw registration submission
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub password_confirmation: String,
    #[serde(default)]
    pub barangay: String,
    /// Optional; when present it must be the fixed city
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default = "default_user_type")]
    pub user_type: String,
    #[serde(default)]
    pub terms_agreed: bool,
    #[serde(default)]
    pub marketing_emails: bool,
}

fn default_user_type() -> String {
    UserType::Freelancer.as_str().to_string()
}

/// Form contents after validation, ready to be persisted
#[derive(Debug, Clone)]
pub struct ValidRegistration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub user_type: UserType,
    pub barangay: String,
    pub city: String,
    pub marketing_emails: bool,
}

impl RegistrationForm {
    /// Submit is only possible once the terms checkbox is ticked
    pub fn can_submit(&self) -> bool {
        self.terms_agreed
    }

    /// Check every field; returns all failures at once
    pub fn validate(&self) -> Result<ValidRegistration, FieldErrors> {
        let mut errors = FieldErrors::new();
        let mut fail = |field: &str, message: &str| {
            errors
                .entry(field.to_string())
                .or_insert_with(|| message.to_string());
        };

        let first_name = self.first_name.trim();
        if first_name.is_empty() {
            fail("first_name", "The first name field is required.");
        } else if first_name.chars().count() > MAX_FIELD_LENGTH {
            fail("first_name", "The first name may not be greater than 255 characters.");
        }

        let last_name = self.last_name.trim();
        if last_name.is_empty() {
            fail("last_name", "The last name field is required.");
        } else if last_name.chars().count() > MAX_FIELD_LENGTH {
            fail("last_name", "The last name may not be greater than 255 characters.");
        }

        let email = self.email.trim().to_lowercase();
        if email.is_empty() {
            fail("email", "The email field is required.");
        } else if email.chars().count() > MAX_FIELD_LENGTH || !is_plausible_email(&email) {
            fail("email", "The email must be a valid email address.");
        }

        if self.password.is_empty() {
            fail("password", "The password field is required.");
        } else if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            fail("password", "The password must be at least 8 characters.");
        } else if self.password != self.password_confirmation {
            fail("password", "The password field confirmation does not match.");
        }

        if self.barangay.is_empty() {
            fail("barangay", "Please select your barangay.");
        } else if !is_valid_barangay(&self.barangay) {
            fail("barangay", "The selected barangay is invalid.");
        }

        if let Some(city) = &self.city {
            if city != CITY {
                fail("city", "Registration is only open to residents of Lapu-Lapu City.");
            }
        }

        let user_type = self.user_type.parse::<UserType>().ok();
        if user_type.is_none() {
            fail("user_type", "The selected user type is invalid.");
        }

        if !self.terms_agreed {
            fail("terms_agreed", "You must agree to the Terms of Service and Privacy Policy.");
        }

        match user_type {
            Some(user_type) if errors.is_empty() => Ok(ValidRegistration {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                email,
                user_type,
                barangay: self.barangay.clone(),
                city: CITY.to_string(),
                marketing_emails: self.marketing_emails,
            }),
            _ => Err(errors),
        }
    }

    /// Overwrite both password fields in place, then empty them
    pub fn clear_passwords(&mut self) {
        wipe(&mut self.password);
        wipe(&mut self.password_confirmation);
    }
}

fn wipe(secret: &mut String) {
    let len = secret.len();
    secret.clear();
    // Same capacity, so this writes over the old bytes instead of reallocating
    secret.extend(std::iter::repeat('\0').take(len));
    secret.clear();
}

fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain
            .split('.')
            .filter(|label| !label.is_empty())
            .count()
            >= 2
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
