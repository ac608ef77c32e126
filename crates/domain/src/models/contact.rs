//! Contact domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use shared::validation::{
    validate_max_chars, MAX_COMPANY_LENGTH, MAX_EMAIL_LENGTH, MAX_NAME_LENGTH, MAX_PHONE_LENGTH,
};
use validator::{Validate, ValidationError, ValidationErrors};

/// A person or organization with contact details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A validated contact ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
}

/// Field changes for a partial update.
///
/// `None` leaves a field untouched. For `phone` and `company`,
/// `Some(None)` clears the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<Option<String>>,
    pub company: Option<Option<String>>,
}

impl ContactChanges {
    /// Returns the contact as it looks after these changes are applied.
    pub fn apply(self, mut contact: Contact) -> Contact {
        if let Some(name) = self.name {
            contact.name = name;
        }
        if let Some(email) = self.email {
            contact.email = email;
        }
        if let Some(phone) = self.phone {
            contact.phone = phone;
        }
        if let Some(company) = self.company {
            contact.company = company;
        }
        contact
    }
}

/// Request payload for creating a contact.
///
/// `name` and `email` are optional at the wire level so that a missing
/// field is reported as a validation failure instead of a parse error.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateContactRequest {
    #[validate(length(max = 100, message = "Name must be at most 100 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 100, message = "Email must be at most 100 characters"))]
    pub email: Option<String>,

    #[validate(length(max = 20, message = "Phone must be at most 20 characters"))]
    pub phone: Option<String>,

    #[validate(length(max = 100, message = "Company must be at most 100 characters"))]
    pub company: Option<String>,
}

/// Request payload for a partial contact update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateContactRequest {
    pub name: Option<String>,

    pub email: Option<String>,

    #[serde(default, deserialize_with = "deserialize_present")]
    pub phone: Option<Option<String>>,

    #[serde(default, deserialize_with = "deserialize_present")]
    pub company: Option<Option<String>>,
}

impl Validate for UpdateContactRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let mut failed = false;

        let checks: [(&'static str, Option<&str>, usize, &'static str); 4] = [
            ("name", self.name.as_deref(), MAX_NAME_LENGTH, "Name"),
            ("email", self.email.as_deref(), MAX_EMAIL_LENGTH, "Email"),
            ("phone", self.phone.as_ref().and_then(|p| p.as_deref()), MAX_PHONE_LENGTH, "Phone"),
            (
                "company",
                self.company.as_ref().and_then(|c| c.as_deref()),
                MAX_COMPANY_LENGTH,
                "Company",
            ),
        ];

        for (field, value, max, label) in checks {
            if let Some(value) = value {
                if let Err(e) = validate_max_chars(value, max, label) {
                    errors.add(field, e);
                    failed = true;
                }
            }
        }

        for (field, value) in [("name", &self.name), ("email", &self.email)] {
            if value.as_deref() == Some("") {
                let mut err = ValidationError::new("required");
                err.message = Some("Name and email cannot be empty".into());
                errors.add(field, err);
                failed = true;
            }
        }

        if failed {
            Err(errors)
        } else {
            Ok(())
        }
    }
}

impl From<UpdateContactRequest> for ContactChanges {
    fn from(request: UpdateContactRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            phone: request.phone,
            company: request.company,
        }
    }
}

/// Distinguishes an explicit `null` from an absent field.
fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
