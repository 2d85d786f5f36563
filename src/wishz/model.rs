use crate::error::{Result, WishzError};
use chrono::NaiveDateTime;

/// The one timestamp format the record file uses, e.g. `2030-01-01 09:00:00`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthdayRecord {
    pub at: NaiveDateTime,
    pub name: String,
    pub phone: String,
}

impl BirthdayRecord {
    pub fn new(at: NaiveDateTime, name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            at,
            name: name.into(),
            phone: phone.into(),
        }
    }

    /// Parse a timestamp in the fixed file format.
    pub fn parse_timestamp(input: &str) -> Result<NaiveDateTime> {
        let trimmed = input.trim();
        NaiveDateTime::parse_from_str(trimmed, TIMESTAMP_FORMAT)
            .map_err(|_| WishzError::Timestamp(trimmed.to_string()))
    }

    /// Parse one record line: `timestamp,name,phone`, no quoting.
    pub fn from_line(line: &str) -> Result<Self> {
        let parts: Vec<&str> = line.split(',').collect();
        if parts.len() != 3 {
            return Err(WishzError::MalformedLine(line.to_string()));
        }
        Ok(Self {
            at: Self::parse_timestamp(parts[0])?,
            name: parts[1].to_string(),
            phone: parts[2].to_string(),
        })
    }

    pub fn to_line(&self) -> String {
        format!("{},{},{}", self.at.format(TIMESTAMP_FORMAT), self.name, self.phone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn parses_well_formed_line() {
        let record = BirthdayRecord::from_line("2030-01-01 09:00:00,Alice,+15551234567").unwrap();
        assert_eq!(record.name, "Alice");
        assert_eq!(record.phone, "+15551234567");
        assert_eq!(
            record.at,
            NaiveDate::from_ymd_opt(2030, 1, 1)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn rejects_wrong_field_count() {
        let err = BirthdayRecord::from_line("2030-01-01 09:00:00,Alice").unwrap_err();
        assert!(matches!(err, WishzError::MalformedLine(_)));
    }

    #[test]
    fn rejects_bad_timestamp() {
        let err = BirthdayRecord::from_line("next tuesday,Alice,+15551234567").unwrap_err();
        assert!(matches!(err, WishzError::Timestamp(_)));
    }

    #[test]
    fn line_round_trip() {
        let line = "2030-01-01 09:00:00,Alice,+15551234567";
        let record = BirthdayRecord::from_line(line).unwrap();
        assert_eq!(record.to_line(), line);
    }

    #[test]
    fn parse_timestamp_trims_whitespace() {
        let at = BirthdayRecord::parse_timestamp(" 2030-01-01 09:00:00 ").unwrap();
        assert_eq!(at, BirthdayRecord::parse_timestamp("2030-01-01 09:00:00").unwrap());
    }
}
