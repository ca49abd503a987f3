use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};
use validator::Validate;

use crate::Error;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

#[derive(EnumString, Display, VariantArray, Clone, Copy, Debug, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Message,
}

/// The three text inputs of the contact form.
#[derive(Validate, Deserialize, Default, Clone, Debug, PartialEq, Eq)]
pub struct ContactForm {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1), regex(path = *EMAIL_REGEX))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    /// Missing fields are reported before a malformed email.
    pub fn check(&self) -> Result<(), Error> {
        let Err(errors) = self.validate() else {
            return Ok(());
        };

        let missing = errors
            .field_errors()
            .values()
            .flat_map(|errors| errors.iter())
            .any(|error| error.code == "length");

        if missing {
            return Err(Error::MissingFields);
        }

        Err(Error::InvalidEmail)
    }
}

#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct ContactFormState {
    pub form: ContactForm,
    pub is_submitting: bool,
}

impl ContactFormState {
    pub fn name(&self) -> &str {
        &self.form.name
    }

    pub fn email(&self) -> &str {
        &self.form.email
    }

    pub fn message(&self) -> &str {
        &self.form.message
    }
}

/// Snapshot of a validated form, handed to the gateway by value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionPayload {
    name: String,
    email: String,
    message: String,
}

impl SubmissionPayload {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl TryFrom<&ContactForm> for SubmissionPayload {
    type Error = Error;

    fn try_from(form: &ContactForm) -> Result<Self, Self::Error> {
        form.check()?;

        Ok(Self {
            name: form.name.to_owned(),
            email: form.email.to_owned(),
            message: form.message.to_owned(),
        })
    }
}
