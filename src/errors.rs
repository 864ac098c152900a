//! Waitlist-specific error types

use thiserror::Error;

/// Fallback shown when the collector gives us nothing usable.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Message shown when submission credentials are not configured.
pub const CONFIG_FAILURE_MESSAGE: &str =
    "Waitlist submission is not configured. Use the hosted form instead.";

#[derive(Error, Debug)]
pub enum WaitlistError {
    #[error("Airtable access key not configured. Set AMEEN_AIRTABLE_API_KEY environment variable")]
    MissingApiKey,

    #[error("Airtable base not configured. Set AMEEN_AIRTABLE_BASE_ID environment variable")]
    MissingBaseId,

    #[error("collector rejected submission (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl WaitlistError {
    /// Text shown to the user above the form. Configuration and transport
    /// problems collapse to fixed messages; API rejections carry whatever
    /// message the collector returned.
    pub fn user_message(&self) -> String {
        match self {
            WaitlistError::MissingApiKey | WaitlistError::MissingBaseId => {
                CONFIG_FAILURE_MESSAGE.to_string()
            }
            WaitlistError::Api { message, .. } => message.clone(),
            WaitlistError::Http(_) => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }

    /// True for errors raised before any network attempt.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            WaitlistError::MissingApiKey | WaitlistError::MissingBaseId
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_errors_surface_collector_message_verbatim() {
        let err = WaitlistError::Api {
            status: 422,
            message: "Invalid email".to_string(),
        };
        assert_eq!(err.user_message(), "Invalid email");
    }

    #[tokio::test]
    async fn transport_errors_fall_back_to_generic_message() {
        // An invalid URL fails at request build time, before any network use,
        // which is the cheapest way to get a real reqwest::Error.
        let err = reqwest::Client::new()
            .get("http://")
            .send()
            .await
            .unwrap_err();

        let err = WaitlistError::from(err);
        assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
        assert!(!err.is_configuration());
    }

    #[test]
    fn configuration_errors_use_fixed_message() {
        assert_eq!(
            WaitlistError::MissingApiKey.user_message(),
            CONFIG_FAILURE_MESSAGE
        );
        assert_eq!(
            WaitlistError::MissingBaseId.user_message(),
            CONFIG_FAILURE_MESSAGE
        );
        assert!(WaitlistError::MissingBaseId.is_configuration());
    }
}
