//! Agreement data model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// All details collected for one sublease agreement.
///
/// Built fresh from form input for every render call. Amount fields are
/// free-form strings interpolated verbatim after a `$` prefix; they are
/// never parsed as numbers. Dates are calendar dates, not instants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgreementRecord {
    pub tenant_name: String,
    pub sublessor_name: String,
    pub property_address: String,
    pub rent_amount: String,
    /// Partial-month rent, emitted as an extra preamble line when present.
    pub prorate_amount: Option<String>,
    pub security_deposit: String,
    pub lease_start_date: NaiveDate,
    pub lease_end_date: NaiveDate,
    pub agreement_date: NaiveDate,
}

impl AgreementRecord {
    /// Check that every required field carries a non-blank value.
    ///
    /// The renderer trusts its input; this is for the collecting edge to
    /// call before a render is attempted.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required: [(&'static str, &str); 5] = [
            ("tenantName", &self.tenant_name),
            ("sublessorName", &self.sublessor_name),
            ("propertyAddress", &self.property_address),
            ("rentAmount", &self.rent_amount),
            ("securityDeposit", &self.security_deposit),
        ];

        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(ValidationError::BlankField(name));
            }
        }

        Ok(())
    }

    /// Prorated rent, if supplied and non-blank.
    pub fn prorate(&self) -> Option<&str> {
        self.prorate_amount
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }

    /// First whitespace-delimited token of the sublessor's name.
    pub fn sublessor_first_name(&self) -> &str {
        self.sublessor_name
            .split_whitespace()
            .next()
            .unwrap_or(&self.sublessor_name)
    }

    /// Download filename for the rendered document.
    pub fn file_name(&self) -> String {
        format!("{} Sublease Agreement.pdf", self.tenant_name)
    }
}
