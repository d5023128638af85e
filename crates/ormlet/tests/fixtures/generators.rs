//! Deterministic sample data generators for the fixture entities.

use ormlet::{QueryOutput, Value};

/// Generate emails: user_0@example.com, user_1@example.com, ...
pub fn generate_emails(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("user_{i}@example.com")).collect()
}

/// Generate full names: User 0, User 1, ...
pub fn generate_full_names(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("User {i}")).collect()
}

/// Generate January 2024 dates: 2024-01-01, 2024-01-02, ...
///
/// Caps at 31 values; the fixture schemas never need more.
pub fn generate_dates(count: usize) -> Vec<String> {
    (0..count.min(31))
        .map(|i| format!("2024-01-{:02}", i + 1))
        .collect()
}

/// Generate timestamps on 2024-01-01, one hour apart.
pub fn generate_timestamps(count: usize) -> Vec<String> {
    (0..count.min(24))
        .map(|i| format!("2024-01-01 {i:02}:00:00"))
        .collect()
}

/// Build a single-row result set, as an executor would report it for
/// `RETURNING *` or a one-row SELECT.
pub fn single_row(pairs: &[(&str, Value)]) -> QueryOutput {
    let columns = pairs.iter().map(|(c, _)| (*c).to_string()).collect();
    let values = pairs.iter().map(|(_, v)| v.clone()).collect();
    QueryOutput::new(columns, vec![values])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_emails() {
        let emails = generate_emails(2);
        assert_eq!(emails, vec!["user_0@example.com", "user_1@example.com"]);
    }

    #[test]
    fn test_generate_dates_are_valid_january_days() {
        let dates = generate_dates(3);
        assert_eq!(dates, vec!["2024-01-01", "2024-01-02", "2024-01-03"]);
    }

    #[test]
    fn test_generate_timestamps_advance_hourly() {
        let stamps = generate_timestamps(2);
        assert_eq!(stamps, vec!["2024-01-01 00:00:00", "2024-01-01 01:00:00"]);
    }

    #[test]
    fn test_single_row_round_trip() {
        let output = single_row(&[("id", Value::Int(1)), ("name", Value::Text("a".into()))]);
        assert_eq!(output.row_count(), 1);
        assert_eq!(output.first().unwrap().get("id"), Some(&Value::Int(1)));
    }
}
