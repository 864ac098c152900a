use serde::{Deserialize, Serialize};

/// Estimated monthly commission volume, in AED. Matches the single-select
/// options on the collector's waitlist table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeBucket {
    Under50k,
    From50kTo100k,
    From100kTo250k,
    From250kTo500k,
    Over500k,
}

impl VolumeBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            VolumeBucket::Under50k => "Under 50k",
            VolumeBucket::From50kTo100k => "50k-100k",
            VolumeBucket::From100kTo250k => "100k-250k",
            VolumeBucket::From250kTo500k => "250k-500k",
            VolumeBucket::Over500k => "Over 500k",
        }
    }

    pub fn all() -> Vec<VolumeBucket> {
        vec![
            VolumeBucket::Under50k,
            VolumeBucket::From50kTo100k,
            VolumeBucket::From100kTo250k,
            VolumeBucket::From250kTo500k,
            VolumeBucket::Over500k,
        ]
    }

    /// Parse a bucket from its label, as entered on the command line.
    pub fn parse(s: &str) -> Option<VolumeBucket> {
        VolumeBucket::all()
            .into_iter()
            .find(|b| b.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

impl std::fmt::Display for VolumeBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-entered waitlist data. Created empty, mutated field by field, read in
/// full at submission time, and cleared only after a confirmed success. Never
/// persisted anywhere.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormState {
    pub company_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub volume: Option<VolumeBucket>,
}

impl FormState {
    /// Label of the first empty mandatory field, if any. The volume bucket is
    /// optional and never blocks submission.
    pub fn first_missing_field(&self) -> Option<&'static str> {
        if self.company_name.trim().is_empty() {
            Some("Company Name")
        } else if self.contact_name.trim().is_empty() {
            Some("Contact Name")
        } else if self.email.trim().is_empty() {
            Some("Email")
        } else if self.phone.trim().is_empty() {
            Some("Phone")
        } else {
            None
        }
    }

    pub fn is_complete(&self) -> bool {
        self.first_missing_field().is_none()
    }

    /// Reset to the empty initial value.
    pub fn clear(&mut self) {
        *self = FormState::default();
    }
}

/// Submission lifecycle. Exactly one value is active at a time; transitions
/// are driven solely by submission outcomes.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionStatus {
    Idle,
    Submitting,
    Submitted,
    Failed(String),
}

impl SubmissionStatus {
    /// Whether a new submit action may issue a request. Blocked while a
    /// request is outstanding and after a confirmed success, when the form is
    /// replaced by the thank-you acknowledgment.
    pub fn allows_submit(&self) -> bool {
        !matches!(
            self,
            SubmissionStatus::Submitting | SubmissionStatus::Submitted
        )
    }
}

impl Default for SubmissionStatus {
    fn default() -> Self {
        SubmissionStatus::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> FormState {
        FormState {
            company_name: "Acme Realty".to_string(),
            contact_name: "J. Doe".to_string(),
            email: "j@acme.ae".to_string(),
            phone: "+971500000000".to_string(),
            volume: Some(VolumeBucket::From100kTo250k),
        }
    }

    #[test]
    fn missing_fields_reported_in_form_order() {
        let mut form = FormState::default();
        assert_eq!(form.first_missing_field(), Some("Company Name"));
        form.company_name = "Acme Realty".to_string();
        assert_eq!(form.first_missing_field(), Some("Contact Name"));
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let mut form = filled_form();
        form.email = "   ".to_string();
        assert_eq!(form.first_missing_field(), Some("Email"));
    }

    #[test]
    fn volume_is_optional() {
        let mut form = filled_form();
        form.volume = None;
        assert!(form.is_complete());
    }

    #[test]
    fn clear_resets_to_initial_value() {
        let mut form = filled_form();
        form.clear();
        assert_eq!(form, FormState::default());
    }

    #[test]
    fn bucket_labels_round_trip_through_parse() {
        for bucket in VolumeBucket::all() {
            assert_eq!(VolumeBucket::parse(bucket.as_str()), Some(bucket));
        }
        assert_eq!(
            VolumeBucket::parse("100K-250K"),
            Some(VolumeBucket::From100kTo250k)
        );
        assert_eq!(VolumeBucket::parse("a lot"), None);
    }

    #[test]
    fn submit_blocked_while_submitting_and_after_success() {
        assert!(SubmissionStatus::Idle.allows_submit());
        assert!(SubmissionStatus::Failed("x".to_string()).allows_submit());
        assert!(!SubmissionStatus::Submitting.allows_submit());
        assert!(!SubmissionStatus::Submitted.allows_submit());
    }
}
