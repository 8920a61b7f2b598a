use gloo_console::log;
use gloo_net::http::Request;
use serde::Deserialize;

use super::types::NewRegistration;
use crate::config;

const REGISTRATIONS_TABLE: &str = "webinar_registrations";

/// Postgres code for a unique-constraint violation, surfaced verbatim in the
/// PostgREST error body when the email already exists.
const UNIQUE_VIOLATION: &str = "23505";

/// Failure modes of the insert, as far as the UI cares to distinguish them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// The email column's uniqueness constraint rejected the record.
    DuplicateEmail,
    /// The service answered with a non-2xx status for any other reason.
    Rejected { status: u16, message: String },
    /// The request never produced a response (network down, bad payload).
    Transport(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::DuplicateEmail => write!(f, "email is already registered"),
            StoreError::Rejected { status, message } => {
                write!(f, "registration rejected (status {status}): {message}")
            }
            StoreError::Transport(reason) => write!(f, "request failed: {reason}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Error body shape PostgREST uses for failed writes.
#[derive(Deserialize)]
struct PostgrestError {
    code: Option<String>,
    message: Option<String>,
}

/// Inserts one registration record. One attempt, no retries; a failed call
/// surfaces as a `StoreError` and the user decides whether to resubmit.
pub async fn insert_registration(record: &NewRegistration) -> Result<(), StoreError> {
    let url = format!(
        "{}/rest/v1/{}",
        config::get_supabase_url(),
        REGISTRATIONS_TABLE
    );
    let response = Request::post(&url)
        .header("apikey", config::get_supabase_anon_key())
        .header(
            "Authorization",
            &format!("Bearer {}", config::get_supabase_anon_key()),
        )
        .header("Content-Type", "application/json")
        .header("Prefer", "return=minimal")
        .json(record)
        .map_err(|e| StoreError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| StoreError::Transport(e.to_string()))?;

    if response.ok() {
        return Ok(());
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    log!("registration insert rejected, status:", status);
    Err(rejection(status, &body))
}

/// Classifies a non-2xx response. Keys on the Postgres code in the body, not
/// the HTTP status; PostgREST reports constraint violations either way.
fn rejection(status: u16, body: &str) -> StoreError {
    match serde_json::from_str::<PostgrestError>(body) {
        Ok(err) if err.code.as_deref() == Some(UNIQUE_VIOLATION) => StoreError::DuplicateEmail,
        Ok(err) => StoreError::Rejected {
            status,
            message: err.message.unwrap_or_default(),
        },
        Err(_) => StoreError::Rejected {
            status,
            message: String::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_email_is_detected_from_the_body_code() {
        let body = r#"{
            "code": "23505",
            "details": "Key (email)=(asha@example.com) already exists.",
            "hint": null,
            "message": "duplicate key value violates unique constraint \"webinar_registrations_email_key\""
        }"#;
        assert_eq!(rejection(409, body), StoreError::DuplicateEmail);
    }

    #[test]
    fn other_postgrest_codes_are_generic_rejections() {
        let body = r#"{"code":"23502","message":"null value in column \"name\""}"#;
        assert_eq!(
            rejection(400, body),
            StoreError::Rejected {
                status: 400,
                message: "null value in column \"name\"".to_string(),
            }
        );
    }

    #[test]
    fn unreadable_bodies_are_generic_rejections() {
        assert_eq!(
            rejection(500, "<html>gateway timeout</html>"),
            StoreError::Rejected {
                status: 500,
                message: String::new(),
            }
        );
    }

    #[test]
    fn duplicate_detection_ignores_the_http_status() {
        let body = r#"{"code":"23505","message":"duplicate key value"}"#;
        assert_eq!(rejection(400, body), StoreError::DuplicateEmail);
    }
}
