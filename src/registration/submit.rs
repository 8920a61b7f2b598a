use std::future::Future;

use super::store::StoreError;
use super::types::{NewRegistration, RegistrationInput, RegistrationOutcome};
use super::validate::validate;

/// Runs one submit attempt: validate, then at most one insert against the
/// store. Generic over the insert operation so the flow can be exercised
/// without a browser; the form passes `store::insert_registration` in.
pub async fn submit<F, Fut>(input: &RegistrationInput, insert: F) -> RegistrationOutcome
where
    F: FnOnce(NewRegistration) -> Fut,
    Fut: Future<Output = Result<(), StoreError>>,
{
    let field_errors = validate(input);
    if !field_errors.is_empty() {
        return RegistrationOutcome {
            field_errors,
            ..RegistrationOutcome::default()
        };
    }

    match insert(input.normalized()).await {
        Ok(()) => RegistrationOutcome {
            succeeded: true,
            ..RegistrationOutcome::default()
        },
        Err(err) => RegistrationOutcome {
            submit_error: Some(submit_error_message(&err).to_string()),
            ..RegistrationOutcome::default()
        },
    }
}

/// One submission-level message per failure class. Transport problems get
/// their own wording so the user knows the attempt may not have reached the
/// service at all.
pub fn submit_error_message(err: &StoreError) -> &'static str {
    match err {
        StoreError::DuplicateEmail => "This email is already registered!",
        StoreError::Rejected { .. } => "Registration failed. Please try again.",
        StoreError::Transport(_) => "Something went wrong. Please try again.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    fn valid_input() -> RegistrationInput {
        RegistrationInput {
            name: "Asha Rao".into(),
            email: "asha@example.com".into(),
            phone: "9876543210".into(),
        }
    }

    #[test]
    fn accepted_insert_succeeds_with_the_normalized_record() {
        let seen = RefCell::new(None);
        let outcome = block_on(submit(
            &RegistrationInput {
                email: "  Asha@Example.com ".into(),
                ..valid_input()
            },
            |record| {
                *seen.borrow_mut() = Some(record);
                async { Ok(()) }
            },
        ));

        assert!(outcome.succeeded);
        assert!(outcome.submit_error.is_none());
        assert!(outcome.field_errors.is_empty());
        let record = seen.borrow().clone().unwrap();
        assert_eq!(record.email, "asha@example.com");
        assert_eq!(record.name, "Asha Rao");
        assert_eq!(record.phone, "9876543210");
    }

    #[test]
    fn duplicate_email_keeps_the_form_with_a_conflict_message() {
        let outcome = block_on(submit(&valid_input(), |_| async {
            Err(StoreError::DuplicateEmail)
        }));

        assert!(!outcome.succeeded);
        assert_eq!(
            outcome.submit_error.as_deref(),
            Some("This email is already registered!")
        );
        assert!(outcome.field_errors.is_empty());
    }

    #[test]
    fn service_rejection_maps_to_the_generic_message() {
        let outcome = block_on(submit(&valid_input(), |_| async {
            Err(StoreError::Rejected {
                status: 400,
                message: "row level security".into(),
            })
        }));

        assert_eq!(
            outcome.submit_error.as_deref(),
            Some("Registration failed. Please try again.")
        );
    }

    #[test]
    fn transport_failure_maps_to_the_unexpected_message() {
        let outcome = block_on(submit(&valid_input(), |_| async {
            Err(StoreError::Transport("connection refused".into()))
        }));

        assert!(!outcome.succeeded);
        assert_eq!(
            outcome.submit_error.as_deref(),
            Some("Something went wrong. Please try again.")
        );
    }

    #[test]
    fn invalid_input_never_reaches_the_store() {
        let called = Cell::new(false);
        let outcome = block_on(submit(
            &RegistrationInput {
                name: "".into(),
                email: "bad-email".into(),
                phone: "123".into(),
            },
            |_| {
                called.set(true);
                async { Ok(()) }
            },
        ));

        assert!(!called.get());
        assert!(!outcome.succeeded);
        assert!(outcome.submit_error.is_none());
        assert_eq!(outcome.field_errors.name.as_deref(), Some("Name is required"));
        assert_eq!(
            outcome.field_errors.email.as_deref(),
            Some("Please enter a valid email")
        );
        assert_eq!(
            outcome.field_errors.phone.as_deref(),
            Some("Please enter a valid 10-digit phone number")
        );
    }
}
