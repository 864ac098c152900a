//! Outbound interface to the lead collector

use async_trait::async_trait;

use crate::errors::WaitlistError;
use crate::models::FormState;

pub mod airtable;

pub use airtable::{hosted_form_url, AirtableCollector};

/// Trait abstraction over the lead collector, enabling mocking in tests.
///
/// One operation: deliver a populated form to the external service that
/// durably records waitlist leads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Collector: Send + Sync {
    async fn submit_lead(&self, lead: &FormState) -> Result<(), WaitlistError>;
}
