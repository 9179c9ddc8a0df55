use chrono::NaiveDate;

/// Status values accepted on the wire. Matching is case-sensitive and
/// no normalization is applied.
pub const VALID_STATUSES: [&str; 3] = ["pendente", "realizando", "concluída"];

/// True when `date` is empty or a real calendar date in `YYYY-MM-DD` form.
pub fn is_valid_date(date: &str) -> bool {
    if date.is_empty() {
        return true;
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok()
}

pub fn is_valid_status(status: &str) -> bool {
    VALID_STATUSES.contains(&status)
}
