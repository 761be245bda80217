//! Contact message validation. The demo form never transmits anything.

use crate::error::ValidationError;

/// A message typed into the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    /// Sender name. Required.
    pub name: String,
    /// Sender email. Required, must look like an address.
    pub email: String,
    /// Message body. Required.
    pub message: String,
}

impl ContactMessage {
    /// Check the constraints the form inputs declare: every field present,
    /// email with a non-empty local part and domain.
    ///
    /// # Errors
    ///
    /// Returns the first failing constraint.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::MissingField { field });
            }
        }
        let email = self.email.trim();
        let looks_like_address = email
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty());
        if !looks_like_address {
            return Err(ValidationError::InvalidEmail {
                value: email.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ContactMessage {
        ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello there".to_string(),
        }
    }

    #[test]
    fn should_accept_a_complete_message() {
        assert_eq!(valid().validate(), Ok(()));
    }

    #[test]
    fn should_reject_missing_required_fields() {
        for field in ["name", "email", "message"] {
            let mut message = valid();
            match field {
                "name" => message.name = "   ".to_string(),
                "email" => message.email = String::new(),
                _ => message.message = String::new(),
            }
            assert_eq!(
                message.validate(),
                Err(ValidationError::MissingField { field })
            );
        }
    }

    #[test]
    fn should_reject_malformed_email_addresses() {
        for email in ["plain", "@example.com", "ada@"] {
            let mut message = valid();
            message.email = email.to_string();
            assert_eq!(
                message.validate(),
                Err(ValidationError::InvalidEmail {
                    value: email.to_string()
                })
            );
        }
    }
}
