//! Waitlist submission flow
//!
//! Owns the form state and the submission state machine
//! (`Idle -> Submitting -> {Submitted | Failed}`). Exactly one outbound
//! request is issued per user-initiated submit action; there are no implicit
//! retries, and no request is issued while a prior one is outstanding.

use tracing::{info, warn};

use crate::collector::{AirtableCollector, Collector};
use crate::config::Config;
use crate::models::{FormState, SubmissionStatus};

pub struct SubmissionFlow {
    collector: Option<Box<dyn Collector>>,
    /// Remembered configuration failure, surfaced on submit without any
    /// network attempt.
    config_error: Option<String>,
    pub form: FormState,
    status: SubmissionStatus,
}

impl SubmissionFlow {
    pub fn new(collector: Box<dyn Collector>) -> Self {
        Self {
            collector: Some(collector),
            config_error: None,
            form: FormState::default(),
            status: SubmissionStatus::Idle,
        }
    }

    /// Build the flow against the real collector. A missing credential does
    /// not prevent construction; it resurfaces as a configuration failure on
    /// the first submit attempt.
    pub fn from_config(config: &Config) -> Self {
        match AirtableCollector::from_config(config) {
            Ok(collector) => Self::new(Box::new(collector)),
            Err(err) => {
                warn!("Waitlist collector unavailable: {}", err);
                Self {
                    collector: None,
                    config_error: Some(err.user_message()),
                    form: FormState::default(),
                    status: SubmissionStatus::Idle,
                }
            }
        }
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// Attempt to deliver the current form to the collector.
    ///
    /// No-op while a request is outstanding or after a confirmed success. On
    /// success the form is cleared; on any failure it is preserved unmodified
    /// so the user can retry without re-entering data.
    pub async fn submit(&mut self) -> &SubmissionStatus {
        if !self.status.allows_submit() {
            return &self.status;
        }

        let collector = match &self.collector {
            Some(collector) => collector,
            None => {
                let message = self
                    .config_error
                    .clone()
                    .unwrap_or_else(|| crate::errors::CONFIG_FAILURE_MESSAGE.to_string());
                self.status = SubmissionStatus::Failed(message);
                return &self.status;
            }
        };

        if let Some(field) = self.form.first_missing_field() {
            self.status = SubmissionStatus::Failed(format!("{} is required", field));
            return &self.status;
        }

        self.status = SubmissionStatus::Submitting;

        match collector.submit_lead(&self.form).await {
            Ok(()) => {
                info!("Waitlist submission confirmed");
                self.form.clear();
                self.status = SubmissionStatus::Submitted;
            }
            Err(err) => {
                warn!("Waitlist submission failed: {}", err);
                self.status = SubmissionStatus::Failed(err.user_message());
            }
        }

        &self.status
    }

    #[cfg(test)]
    fn force_status(&mut self, status: SubmissionStatus) {
        self.status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::MockCollector;
    use crate::errors::{WaitlistError, GENERIC_FAILURE_MESSAGE};
    use crate::models::VolumeBucket;

    fn filled_form() -> FormState {
        FormState {
            company_name: "Acme Realty".to_string(),
            contact_name: "J. Doe".to_string(),
            email: "j@acme.ae".to_string(),
            phone: "+971500000000".to_string(),
            volume: Some(VolumeBucket::From100kTo250k),
        }
    }

    fn flow_with(collector: MockCollector) -> SubmissionFlow {
        SubmissionFlow::new(Box::new(collector))
    }

    fn flow_without_collector() -> SubmissionFlow {
        SubmissionFlow {
            collector: None,
            config_error: Some(crate::errors::CONFIG_FAILURE_MESSAGE.to_string()),
            form: FormState::default(),
            status: SubmissionStatus::Idle,
        }
    }

    #[tokio::test]
    async fn successful_submit_clears_form_and_reports_submitted() {
        let mut collector = MockCollector::new();
        collector
            .expect_submit_lead()
            .times(1)
            .returning(|_| Ok(()));

        let mut flow = flow_with(collector);
        flow.form = filled_form();

        assert_eq!(flow.submit().await, &SubmissionStatus::Submitted);
        assert_eq!(flow.form, FormState::default());
    }

    #[tokio::test]
    async fn missing_configuration_fails_without_network_attempt() {
        let mut flow = flow_without_collector();
        flow.form = filled_form();

        let status = flow.submit().await;
        assert_eq!(
            status,
            &SubmissionStatus::Failed(crate::errors::CONFIG_FAILURE_MESSAGE.to_string())
        );
        // Form data stays intact for when configuration is fixed.
        assert_eq!(flow.form, filled_form());
    }

    #[tokio::test]
    async fn incomplete_form_fails_before_any_request() {
        let mut collector = MockCollector::new();
        collector.expect_submit_lead().times(0);

        let mut flow = flow_with(collector);
        flow.form.company_name = "Acme Realty".to_string();

        let status = flow.submit().await;
        assert_eq!(
            status,
            &SubmissionStatus::Failed("Contact Name is required".to_string())
        );
    }

    #[tokio::test]
    async fn collector_rejection_surfaces_message_and_preserves_form() {
        let mut collector = MockCollector::new();
        collector.expect_submit_lead().times(1).returning(|_| {
            Err(WaitlistError::Api {
                status: 422,
                message: "Invalid email".to_string(),
            })
        });

        let mut flow = flow_with(collector);
        flow.form = filled_form();

        let status = flow.submit().await;
        assert_eq!(status, &SubmissionStatus::Failed("Invalid email".to_string()));
        assert_eq!(flow.form, filled_form());
    }

    /// A real reqwest::Error, produced without touching the network.
    async fn transport_error() -> WaitlistError {
        let err = reqwest::Client::new()
            .get("http://")
            .send()
            .await
            .unwrap_err();
        WaitlistError::Http(err)
    }

    #[tokio::test]
    async fn transport_failure_uses_generic_fallback_and_preserves_form() {
        let err = transport_error().await;
        let mut collector = MockCollector::new();
        collector
            .expect_submit_lead()
            .times(1)
            .return_once(move |_| Err(err));

        let mut flow = flow_with(collector);
        flow.form = filled_form();

        let status = flow.submit().await;
        assert_eq!(
            status,
            &SubmissionStatus::Failed(GENERIC_FAILURE_MESSAGE.to_string())
        );
        assert_eq!(flow.form, filled_form());
    }

    #[tokio::test]
    async fn repeated_failures_leave_form_unchanged_and_allow_retry() {
        let mut collector = MockCollector::new();
        collector.expect_submit_lead().times(2).returning(|_| {
            Err(WaitlistError::Api {
                status: 500,
                message: GENERIC_FAILURE_MESSAGE.to_string(),
            })
        });

        let mut flow = flow_with(collector);
        flow.form = filled_form();

        flow.submit().await;
        assert_eq!(flow.form, filled_form());
        // Failure is not terminal; a second attempt issues exactly one more
        // request with the same data.
        flow.submit().await;
        assert_eq!(flow.form, filled_form());
        assert!(matches!(flow.status(), SubmissionStatus::Failed(_)));
    }

    #[tokio::test]
    async fn no_request_while_submission_outstanding() {
        let mut collector = MockCollector::new();
        collector.expect_submit_lead().times(0);

        let mut flow = flow_with(collector);
        flow.form = filled_form();
        flow.force_status(SubmissionStatus::Submitting);

        assert_eq!(flow.submit().await, &SubmissionStatus::Submitting);
    }

    #[tokio::test]
    async fn submitted_is_terminal_for_the_session() {
        let mut collector = MockCollector::new();
        collector
            .expect_submit_lead()
            .times(1)
            .returning(|_| Ok(()));

        let mut flow = flow_with(collector);
        flow.form = filled_form();
        flow.submit().await;

        // The thank-you view replaces the form; further submits are no-ops.
        assert_eq!(flow.submit().await, &SubmissionStatus::Submitted);
    }
}
