//! Clause templates for the sublease agreement.
//!
//! All of the agreement's prose lives here as template functions over the
//! record, evaluated in a fixed order by the renderer. Keeping the text in
//! one place separates the clause content from the drawing mechanics.
//!
//! Numbering: the preamble (Rent / optional Prorated Rent / Security
//! Deposit) and the "The parties agree:" clause list are independent
//! sequences. A supplied prorated amount shifts the Security Deposit line
//! from 2 to 3 but never renumbers the agreement clauses, which always run
//! 1-3, a-c, then 4-11.

use crate::record::AgreementRecord;

/// Heading drawn centered at the top of the document.
pub const TITLE: &str = "Agreement";

/// Lead-in line for the numbered clause list.
pub const PARTIES_AGREE: &str = "The parties agree:";

/// Introductory paragraph naming both parties, the term and the premises.
pub fn intro(record: &AgreementRecord) -> String {
    format!(
        "This agreement is made between {} and {} for the period beginning {}, \
         and ending {}, and will convert to a month-to-month at {}.",
        record.tenant_name,
        record.sublessor_name,
        crate::dates::long_form(record.lease_start_date),
        crate::dates::long_form(record.lease_end_date),
        record.property_address,
    )
}

/// Numbered amount lines preceding the clause list.
pub fn preamble(record: &AgreementRecord) -> Vec<String> {
    let mut lines = vec![format!("1. Rent: ${}", record.rent_amount)];
    let mut number = 2;

    if let Some(prorate) = record.prorate() {
        lines.push(format!("{}. Prorated Rent: ${}", number, prorate));
        number += 1;
    }

    lines.push(format!(
        "{}. Security Deposit: ${}",
        number, record.security_deposit
    ));
    lines
}

/// Clauses 1-3.
pub fn primary(record: &AgreementRecord) -> Vec<String> {
    let tenant = &record.tenant_name;
    let sublessor = &record.sublessor_name;
    vec![
        format!(
            "If the monthly electric bill exceeds $200, the amount over $200 will be \
             divided equally among three occupants, with {tenant} responsible for \
             his/her share of the excess charge."
        ),
        "Rent will be paid on the first of the month, if payment is not received by \
         the 3rd of the month a $50 late fee will be applied."
            .to_string(),
        format!(
            "Both {sublessor} and {tenant} will be required to give a 30-day notice \
             period in the event parties want to terminate the agreement earlier."
        ),
    ]
}

/// Lettered sub-clauses nested under clause 3.
pub fn nested(record: &AgreementRecord) -> Vec<String> {
    let tenant = &record.tenant_name;
    vec![
        format!(
            "{tenant} must provide 30 days' notice before the end date of the \
             agreement if he/she decides to vacate by the end of the agreement."
        ),
        format!("If a 30-day notice is not given security deposit will be forfeited by {tenant}."),
        format!(
            "{tenant} will be charged for a full month's rent in the event the move \
             takes place in the middle of the month."
        ),
    ]
}

/// Clauses 4-11.
pub fn remaining(record: &AgreementRecord) -> Vec<String> {
    let tenant = &record.tenant_name;
    let sublessor = &record.sublessor_name;
    let first = record.sublessor_first_name();
    vec![
        "Security deposit will be returned within 14 days of moving out.".to_string(),
        "Smoking is strictly prohibited within the apartment and building. If you are \
         found smoking in the apartment, a $1,000 fine will be issued."
            .to_string(),
        format!(
            "{tenant} agrees to adhere to cleanliness standards or additional incurred \
             charges for maid services will be required."
        ),
        format!(
            "{tenant} shall pay for all property damage he/she is responsible for in \
             the event something happens during sublease."
        ),
        "A move out cleaning fee of $100 will be applied.".to_string(),
        format!(
            "A joint inspection of the premises shall be conducted by {sublessor} and \
             {tenant} recording any damage or deficiencies that exist as the start of \
             the sublease period."
        ),
        format!(
            "{tenant} shall be liable for the cost of any cleaning or repair to correct \
             damages caused by {tenant} at the end of the period if not recorded at the \
             start of the agreement, normal wear and tears excepted. Security deposit \
             will be refunded after vacating the apartment given there is no damage \
             (except normal wear and tear) found prior to vacating."
        ),
        format!(
            "{tenant} must reimburse {sublessor} for the following fee and expenses \
             incurred by {first}: Any legal fees and disbursements for the preparation \
             and service of legal notices; legal actions or proceedings brought by \
             {sublessor} against {tenant} because of a default by {tenant} under this \
             agreement; or for defending lawsuits brought against {sublessor} because \
             of the actions of {tenant}, or any associates of {tenant}."
        ),
    ]
}
