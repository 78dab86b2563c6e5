//! Calendar date formatting for agreement prose and signature lines

use chrono::NaiveDate;

/// Long form for body prose, e.g. "January 5, 2024".
pub fn long_form(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Short numeric form for signature lines, e.g. "01/05/24".
pub fn short_form(date: NaiveDate) -> String {
    date.format("%m/%d/%y").to_string()
}
