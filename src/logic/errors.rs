//! Error classification
//!
//! Pure helpers that map transport failures and HTTP status codes onto the
//! [`FetchErrorKind`] taxonomy shown to the user.

use crate::api::FetchErrorKind;

/// Classify a non-2xx status code
pub fn classify_status(status: u16) -> FetchErrorKind {
    match status {
        404 | 410 => FetchErrorKind::NotFound,
        _ => FetchErrorKind::Http(status),
    }
}

/// Short human-readable message for a non-2xx status
pub fn status_message(status: u16) -> String {
    match classify_status(status) {
        FetchErrorKind::NotFound => "Product not found".to_string(),
        _ if (500..=599).contains(&status) => {
            format!("Server error ({})", status)
        }
        _ => format!("Request failed ({})", status),
    }
}

/// Message for a transport-level failure, preferring the root cause
pub fn transport_message(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        return "Request timed out".to_string();
    }
    if err.is_connect() {
        return "Could not connect to server".to_string();
    }

    // Walk the chain to the deepest cause for the most informative text
    let mut source = std::error::Error::source(err);
    let mut deepest = err.to_string();
    while let Some(cause) = source {
        deepest = cause.to_string();
        source = cause.source();
    }
    deepest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_not_found() {
        assert_eq!(classify_status(404), FetchErrorKind::NotFound);
        assert_eq!(classify_status(410), FetchErrorKind::NotFound);
    }

    #[test]
    fn test_classify_other_statuses() {
        assert_eq!(classify_status(500), FetchErrorKind::Http(500));
        assert_eq!(classify_status(401), FetchErrorKind::Http(401));
        assert_eq!(classify_status(503), FetchErrorKind::Http(503));
    }

    #[test]
    fn test_status_messages_non_empty() {
        for status in [400, 401, 404, 500, 502, 503] {
            assert!(!status_message(status).is_empty());
        }
    }

    #[test]
    fn test_server_error_message_names_status() {
        assert_eq!(status_message(503), "Server error (503)");
        assert_eq!(status_message(400), "Request failed (400)");
        assert_eq!(status_message(404), "Product not found");
    }
}
