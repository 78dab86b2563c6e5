//! Request models for the agreement API

use agreement_core::AgreementRecord;
use chrono::NaiveDate;
use serde::Deserialize;

/// Form payload for one agreement render. Field names mirror the
/// browser form; dates arrive as ISO calendar dates.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgreementRequest {
    pub tenant_name: String,
    pub sublessor_name: String,
    pub property_address: String,
    pub rent: String,
    #[serde(default)]
    pub prorated_rent: Option<String>,
    pub security_deposit: String,
    pub lease_start_date: NaiveDate,
    pub lease_end_date: NaiveDate,
    pub agreement_date: NaiveDate,
    #[serde(default)]
    pub include_branding: bool,
}

impl AgreementRequest {
    pub fn into_record(self) -> AgreementRecord {
        AgreementRecord {
            tenant_name: self.tenant_name,
            sublessor_name: self.sublessor_name,
            property_address: self.property_address,
            rent_amount: self.rent,
            prorate_amount: self.prorated_rent,
            security_deposit: self.security_deposit,
            lease_start_date: self.lease_start_date,
            lease_end_date: self.lease_end_date,
            agreement_date: self.agreement_date,
        }
    }
}
