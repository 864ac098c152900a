//! Airtable-backed collector implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use super::Collector;
use crate::config::Config;
use crate::errors::{WaitlistError, GENERIC_FAILURE_MESSAGE};
use crate::models::FormState;

const AIRTABLE_BASE_URL: &str = "https://api.airtable.com/v0";

/// Hosted Airtable shared form for the same waitlist table. Alternate way to
/// capture a lead for users without submission credentials; not part of the
/// submission code path.
const HOSTED_FORM_URL: &str =
    "https://airtable.com/embed/app9b9hGRi0mpKNAS/paguxvQdla8hnkhEv/form";

pub fn hosted_form_url() -> &'static str {
    HOSTED_FORM_URL
}

/// Collector that writes leads into an Airtable table via the records API.
pub struct AirtableCollector {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl AirtableCollector {
    /// Build a collector from configuration. Fails with a configuration error
    /// when either mandatory credential is absent.
    pub fn from_config(config: &Config) -> Result<Self, WaitlistError> {
        let (api_key, base_id) = config.credentials()?;

        let client = Client::builder()
            .user_agent(config.http.user_agent.clone())
            .timeout(config.http_timeout())
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            endpoint: record_endpoint(base_id, &config.airtable_table),
        })
    }
}

#[async_trait]
impl Collector for AirtableCollector {
    async fn submit_lead(&self, lead: &FormState) -> Result<(), WaitlistError> {
        debug!("Submitting lead to {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&record_body(lead))
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = extract_error_message(&body);
            warn!("Collector rejected lead (status {}): {}", status, message);
            return Err(WaitlistError::Api {
                status: status.as_u16(),
                message,
            });
        }

        info!("Lead recorded for company: {}", lead.company_name);
        Ok(())
    }
}

fn record_endpoint(base_id: &str, table: &str) -> String {
    format!("{}/{}/{}", AIRTABLE_BASE_URL, base_id, table)
}

/// Map the form into the collector's expected field labels. The volume bucket
/// is omitted entirely when unset so the table cell stays blank.
fn record_body(lead: &FormState) -> Value {
    let mut fields = json!({
        "Company Name": lead.company_name,
        "Contact Name": lead.contact_name,
        "Email": lead.email,
        "Phone": lead.phone,
    });
    if let Some(bucket) = lead.volume {
        fields["Estimated Monthly Volume"] = Value::String(bucket.as_str().to_string());
    }
    json!({ "fields": fields })
}

#[derive(Debug, Deserialize)]
struct AirtableErrorResponse {
    error: AirtableErrorDetail,
}

#[derive(Debug, Deserialize)]
struct AirtableErrorDetail {
    message: Option<String>,
}

/// Pull a human-readable message out of an error body, falling back to the
/// generic failure text when the body has no parseable message.
fn extract_error_message(body: &str) -> String {
    match serde_json::from_str::<AirtableErrorResponse>(body) {
        Ok(AirtableErrorResponse {
            error: AirtableErrorDetail {
                message: Some(message),
            },
        }) if !message.is_empty() => message,
        _ => GENERIC_FAILURE_MESSAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VolumeBucket;

    #[test]
    fn endpoint_joins_base_and_table() {
        assert_eq!(
            record_endpoint("app123", "Waitlist"),
            "https://api.airtable.com/v0/app123/Waitlist"
        );
    }

    #[test]
    fn record_body_uses_collector_field_labels() {
        let lead = FormState {
            company_name: "Acme Realty".to_string(),
            contact_name: "J. Doe".to_string(),
            email: "j@acme.ae".to_string(),
            phone: "+971500000000".to_string(),
            volume: Some(VolumeBucket::From100kTo250k),
        };

        let body = record_body(&lead);
        let fields = &body["fields"];
        assert_eq!(fields["Company Name"], "Acme Realty");
        assert_eq!(fields["Contact Name"], "J. Doe");
        assert_eq!(fields["Email"], "j@acme.ae");
        assert_eq!(fields["Phone"], "+971500000000");
        assert_eq!(fields["Estimated Monthly Volume"], "100k-250k");
    }

    #[test]
    fn record_body_omits_unset_volume() {
        let lead = FormState {
            company_name: "Acme Realty".to_string(),
            contact_name: "J. Doe".to_string(),
            email: "j@acme.ae".to_string(),
            phone: "+971500000000".to_string(),
            volume: None,
        };

        let body = record_body(&lead);
        assert!(body["fields"].get("Estimated Monthly Volume").is_none());
    }

    #[test]
    fn error_message_taken_verbatim_from_body() {
        let body = r#"{"error":{"message":"Invalid email"}}"#;
        assert_eq!(extract_error_message(body), "Invalid email");
    }

    #[test]
    fn unparseable_body_falls_back_to_generic_message() {
        assert_eq!(extract_error_message("<html>502</html>"), GENERIC_FAILURE_MESSAGE);
        assert_eq!(extract_error_message(""), GENERIC_FAILURE_MESSAGE);
        assert_eq!(extract_error_message(r#"{"error":{}}"#), GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn from_config_requires_credentials() {
        let config = Config {
            airtable_api_key: None,
            airtable_base_id: Some("app123".to_string()),
            airtable_table: "Waitlist".to_string(),
            http: crate::config::HttpConfig::default(),
        };
        assert!(matches!(
            AirtableCollector::from_config(&config),
            Err(WaitlistError::MissingApiKey)
        ));
    }
}
