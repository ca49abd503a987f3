use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::Error;

#[derive(EnumString, Display, VariantArray, Clone, Copy, Debug, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Level {
    Success,
    Error,
}

/// User-facing outcome of one submit attempt.
///
/// The wording of every variant is part of the public contract, UI layers
/// display `to_string()` verbatim.
#[derive(Display, VariantArray, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notification {
    #[strum(serialize = "Please fill in all fields")]
    MissingFields,
    #[strum(serialize = "Please enter a valid email address")]
    InvalidEmail,
    #[strum(serialize = "Message sent successfully!")]
    Sent,
    #[strum(serialize = "Failed to send message. Please try again.")]
    SendFailed,
}

impl Notification {
    pub fn level(&self) -> Level {
        match self {
            Self::Sent => Level::Success,
            _ => Level::Error,
        }
    }

    pub fn is_success(&self) -> bool {
        self.level() == Level::Success
    }
}

impl From<&Error> for Notification {
    fn from(value: &Error) -> Self {
        match value {
            Error::MissingFields => Self::MissingFields,
            Error::InvalidEmail => Self::InvalidEmail,
            Error::Gateway(_) => Self::SendFailed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_wording() {
        assert_eq!(
            Notification::MissingFields.to_string(),
            "Please fill in all fields"
        );
        assert_eq!(
            Notification::InvalidEmail.to_string(),
            "Please enter a valid email address"
        );
        assert_eq!(Notification::Sent.to_string(), "Message sent successfully!");
        assert_eq!(
            Notification::SendFailed.to_string(),
            "Failed to send message. Please try again."
        );
    }

    #[test]
    fn test_validation_errors_share_wording() {
        for error in [Error::MissingFields, Error::InvalidEmail] {
            assert_eq!(Notification::from(&error).to_string(), error.to_string());
        }

        let gateway = Error::Gateway("relay refused".to_owned());
        assert_eq!(Notification::from(&gateway), Notification::SendFailed);
    }

    #[test]
    fn test_only_sent_is_success() {
        let successes = Notification::VARIANTS
            .iter()
            .filter(|n| n.is_success())
            .collect::<Vec<_>>();

        assert_eq!(successes, vec![&Notification::Sent]);
    }
}
