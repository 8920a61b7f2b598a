use super::types::{FieldErrors, RegistrationInput};

/// Checks a form snapshot and reports one message per invalid field.
/// Pure: no state, no network, safe to call on every submit.
pub fn validate(input: &RegistrationInput) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if input.name.trim().is_empty() {
        errors.name = Some("Name is required".to_string());
    }

    if input.email.trim().is_empty() {
        errors.email = Some("Email is required".to_string());
    } else if !has_email_shape(&input.email) {
        errors.email = Some("Please enter a valid email".to_string());
    }

    if input.phone.trim().is_empty() {
        errors.phone = Some("Phone number is required".to_string());
    } else if digit_count(&input.phone) != 10 {
        errors.phone = Some("Please enter a valid 10-digit phone number".to_string());
    }

    errors
}

/// Lenient shape check: one `@`, a dot somewhere after it with characters on
/// both sides, no whitespace anywhere. Intentionally nothing stricter; this
/// gates typos, the store's constraints gate the data.
fn has_email_shape(raw: &str) -> bool {
    if raw.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // A dot with at least one character on each side. Dots themselves count
    // as surrounding characters; the check is meant to stay this lenient.
    let domain = domain.as_bytes();
    domain.len() >= 3 && domain[1..domain.len() - 1].contains(&b'.')
}

fn digit_count(raw: &str) -> usize {
    raw.chars().filter(char::is_ascii_digit).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> RegistrationInput {
        RegistrationInput {
            name: "Asha Rao".into(),
            email: "asha@example.com".into(),
            phone: "9876543210".into(),
        }
    }

    #[test]
    fn accepts_a_complete_registration() {
        assert!(validate(&valid_input()).is_empty());
    }

    #[test]
    fn name_of_only_whitespace_is_required() {
        let input = RegistrationInput {
            name: "   ".into(),
            ..valid_input()
        };
        assert_eq!(validate(&input).name.as_deref(), Some("Name is required"));
    }

    #[test]
    fn empty_email_reports_required_not_invalid() {
        let input = RegistrationInput {
            email: "  ".into(),
            ..valid_input()
        };
        assert_eq!(validate(&input).email.as_deref(), Some("Email is required"));
    }

    #[test]
    fn email_shape_rejections() {
        for bad in [
            "bad-email",
            "no-at-sign.com",
            "missing@dot",
            "spaces in@mail.com",
            "trailing@dot.",
            "@example.com",
            "double@@example.com",
            "leading@.com",
        ] {
            let input = RegistrationInput {
                email: bad.into(),
                ..valid_input()
            };
            assert_eq!(
                validate(&input).email.as_deref(),
                Some("Please enter a valid email"),
                "expected rejection for {bad:?}"
            );
        }
    }

    #[test]
    fn email_shape_stays_lenient() {
        // These pass the lenient check even though a strict grammar would
        // reject them; tightening here would change product behavior.
        for odd in ["a@b.c", "a@b..c", "a@b.c.", "user@-weird-.tld"] {
            let input = RegistrationInput {
                email: odd.into(),
                ..valid_input()
            };
            assert!(
                validate(&input).email.is_none(),
                "expected acceptance for {odd:?}"
            );
        }
    }

    #[test]
    fn phone_is_stripped_to_digits_before_counting() {
        let input = RegistrationInput {
            phone: "123-456-7890".into(),
            ..valid_input()
        };
        assert!(validate(&input).phone.is_none());

        let input = RegistrationInput {
            phone: "(987) 654-3210".into(),
            ..valid_input()
        };
        assert!(validate(&input).phone.is_none());
    }

    #[test]
    fn phone_with_wrong_digit_count_is_rejected() {
        for bad in ["12345", "123456789012", "98765-4321"] {
            let input = RegistrationInput {
                phone: bad.into(),
                ..valid_input()
            };
            assert_eq!(
                validate(&input).phone.as_deref(),
                Some("Please enter a valid 10-digit phone number"),
                "expected rejection for {bad:?}"
            );
        }
    }

    #[test]
    fn all_three_fields_can_fail_at_once() {
        let input = RegistrationInput {
            name: "".into(),
            email: "bad-email".into(),
            phone: "123".into(),
        };
        let errors = validate(&input);
        assert_eq!(errors.name.as_deref(), Some("Name is required"));
        assert_eq!(errors.email.as_deref(), Some("Please enter a valid email"));
        assert_eq!(
            errors.phone.as_deref(),
            Some("Please enter a valid 10-digit phone number")
        );
    }

    #[test]
    fn validation_is_idempotent() {
        let input = RegistrationInput {
            name: "".into(),
            email: "bad-email".into(),
            phone: "123".into(),
        };
        assert_eq!(validate(&input), validate(&input));
        assert_eq!(validate(&valid_input()), validate(&valid_input()));
    }
}
