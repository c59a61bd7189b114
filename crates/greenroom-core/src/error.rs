use thiserror::Error;

use crate::date::CalendarDate;

/// Core error type with minimal dependencies
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid range: end {end} precedes start {start}")]
    InvalidRange {
        start: CalendarDate,
        end: CalendarDate,
    },
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_bad_input() {
        let err = CoreError::ParseError("2025-13-01".to_string());
        assert_eq!(err.to_string(), "Parse error: 2025-13-01");

        let start: CalendarDate = "2025-01-31".parse().unwrap();
        let end: CalendarDate = "2025-01-01".parse().unwrap();
        let err = CoreError::InvalidRange { start, end };
        assert_eq!(
            err.to_string(),
            "Invalid range: end 2025-01-01 precedes start 2025-01-31"
        );
    }
}
