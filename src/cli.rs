use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::models::{FormState, VolumeBucket};

#[derive(Parser)]
#[command(name = "ameen-waitlist")]
#[command(about = "Join the Ameen Pay commission-advance waitlist from your terminal")]
#[command(version)]
pub struct Cli {
    /// Run the interactive TUI when no command is given
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Submit a waitlist entry without the interactive form
    Submit {
        /// Agency or company name
        #[arg(long)]
        company: String,

        /// Contact person
        #[arg(long)]
        contact: String,

        /// Contact email
        #[arg(long)]
        email: String,

        /// Contact phone number
        #[arg(long)]
        phone: String,

        /// Estimated monthly commission volume in AED
        /// (Under 50k, 50k-100k, 100k-250k, 250k-500k, Over 500k)
        #[arg(long)]
        volume: Option<String>,
    },

    /// Print the hosted waitlist form URL
    HostedForm,
}

impl Commands {
    /// Parse an optional volume label into a bucket
    pub fn parse_volume(volume: Option<&str>) -> Result<Option<VolumeBucket>> {
        match volume {
            None => Ok(None),
            Some(label) => VolumeBucket::parse(label).map(Some).ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown volume range '{}'. Expected one of: {}",
                    label,
                    VolumeBucket::all()
                        .iter()
                        .map(|b| b.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            }),
        }
    }

    /// Build a form from submit arguments
    pub fn build_form(
        company: &str,
        contact: &str,
        email: &str,
        phone: &str,
        volume: Option<&str>,
    ) -> Result<FormState> {
        Ok(FormState {
            company_name: company.to_string(),
            contact_name: contact.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            volume: Self::parse_volume(volume)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_labels_parse_case_insensitively() {
        assert_eq!(
            Commands::parse_volume(Some("100k-250k")).unwrap(),
            Some(VolumeBucket::From100kTo250k)
        );
        assert_eq!(
            Commands::parse_volume(Some("over 500K")).unwrap(),
            Some(VolumeBucket::Over500k)
        );
        assert_eq!(Commands::parse_volume(None).unwrap(), None);
        assert!(Commands::parse_volume(Some("tons")).is_err());
    }

    #[test]
    fn build_form_carries_all_fields() {
        let form = Commands::build_form(
            "Acme Realty",
            "J. Doe",
            "j@acme.ae",
            "+971500000000",
            Some("100k-250k"),
        )
        .unwrap();

        assert_eq!(form.company_name, "Acme Realty");
        assert_eq!(form.volume, Some(VolumeBucket::From100kTo250k));
        assert!(form.is_complete());
    }
}
