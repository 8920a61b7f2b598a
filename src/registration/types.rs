use serde::Serialize;

/// Live form values, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegistrationInput {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl RegistrationInput {
    /// The record actually sent to storage. Email is lowercased here so the
    /// uniqueness constraint on the table is case-insensitive in practice.
    pub fn normalized(&self) -> NewRegistration {
        NewRegistration {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_ascii_lowercase(),
            phone: self.phone.trim().to_string(),
        }
    }
}

/// Insert payload for the `webinar_registrations` table.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewRegistration {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
}

/// One optional message per known field. Absence means the field is valid.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl FieldErrors {
    /// Whole-form validity predicate.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none()
    }

    /// Drops the message for one field, leaving the others untouched.
    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Name => self.name = None,
            Field::Email => self.email = None,
            Field::Phone => self.phone = None,
        }
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Phone => self.phone.as_deref(),
        }
    }
}

/// Result of one submit attempt.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegistrationOutcome {
    pub field_errors: FieldErrors,
    pub submit_error: Option<String>,
    pub succeeded: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_trims_and_lowercases_email() {
        let input = RegistrationInput {
            name: "  Asha Rao ".into(),
            email: " Asha@Example.COM ".into(),
            phone: " 9876543210 ".into(),
        };
        let record = input.normalized();
        assert_eq!(record.name, "Asha Rao");
        assert_eq!(record.email, "asha@example.com");
        assert_eq!(record.phone, "9876543210");
    }

    #[test]
    fn clear_removes_only_the_named_field() {
        let mut errors = FieldErrors {
            name: Some("Name is required".into()),
            email: Some("Email is required".into()),
            phone: Some("Phone number is required".into()),
        };
        errors.clear(Field::Email);
        assert!(errors.email.is_none());
        assert_eq!(errors.name.as_deref(), Some("Name is required"));
        assert_eq!(errors.phone.as_deref(), Some("Phone number is required"));
        assert!(!errors.is_empty());
    }

    #[test]
    fn empty_errors_mean_valid_form() {
        assert!(FieldErrors::default().is_empty());
        let errors = FieldErrors {
            phone: Some("Please enter a valid 10-digit phone number".into()),
            ..FieldErrors::default()
        };
        assert!(!errors.is_empty());
    }
}
