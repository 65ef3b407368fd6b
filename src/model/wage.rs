//! Hourly wage value and earnings arithmetic

use std::fmt;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Why a confirmed input buffer was not accepted as a wage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WageError {
    /// Nothing but whitespace was entered
    Empty,
    /// The text is not a decimal number
    NotANumber(String),
    /// The number is below zero
    Negative,
    /// NaN or infinity
    NotFinite,
}

impl fmt::Display for WageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WageError::Empty => write!(f, "wage is empty"),
            WageError::NotANumber(text) => write!(f, "'{}' is not a number", text),
            WageError::Negative => write!(f, "wage cannot be negative"),
            WageError::NotFinite => write!(f, "wage must be a finite number"),
        }
    }
}

impl std::error::Error for WageError {}

/// A validated hourly wage (finite, non-negative)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wage {
    hourly: f64,
}

impl Wage {
    /// Parse a decimal wage, trimming surrounding whitespace
    pub fn parse(text: &str) -> Result<Self, WageError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(WageError::Empty);
        }

        let hourly: f64 = trimmed
            .parse()
            .map_err(|_| WageError::NotANumber(trimmed.to_string()))?;

        Self::from_hourly(hourly)
    }

    pub fn from_hourly(hourly: f64) -> Result<Self, WageError> {
        if !hourly.is_finite() {
            return Err(WageError::NotFinite);
        }
        if hourly < 0.0 {
            return Err(WageError::Negative);
        }
        Ok(Self { hourly })
    }

    pub fn hourly(&self) -> f64 {
        self.hourly
    }

    pub fn per_second(&self) -> f64 {
        self.hourly / SECONDS_PER_HOUR
    }

    /// Money earned after `elapsed_secs` seconds at this rate
    pub fn earned(&self, elapsed_secs: u64) -> f64 {
        self.per_second() * elapsed_secs as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer_and_decimal() {
        assert_eq!(Wage::parse("15").unwrap().hourly(), 15.0);
        assert_eq!(Wage::parse("15.5").unwrap().hourly(), 15.5);
        assert_eq!(Wage::parse(".5").unwrap().hourly(), 0.5);
        assert_eq!(Wage::parse("  20 ").unwrap().hourly(), 20.0);
    }

    #[test]
    fn test_parse_zero_is_allowed() {
        let wage = Wage::parse("0").unwrap();
        assert_eq!(wage.earned(10_000), 0.0);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(
            Wage::parse("15abc"),
            Err(WageError::NotANumber("15abc".to_string()))
        );
        assert_eq!(
            Wage::parse("$15"),
            Err(WageError::NotANumber("$15".to_string()))
        );
        assert_eq!(Wage::parse("   "), Err(WageError::Empty));
    }

    #[test]
    fn test_parse_rejects_negative_and_non_finite() {
        assert_eq!(Wage::parse("-3"), Err(WageError::Negative));
        assert_eq!(Wage::parse("NaN"), Err(WageError::NotFinite));
        assert_eq!(Wage::parse("inf"), Err(WageError::NotFinite));
    }

    #[test]
    fn test_per_second() {
        let wage = Wage::parse("36").unwrap();
        assert!((wage.per_second() - 0.01).abs() < 1e-12);
    }

    #[test]
    fn test_earned_matches_rate_times_seconds() {
        let wage = Wage::parse("18").unwrap();
        assert_eq!(format!("{:.2}", wage.earned(1800)), "9.00");

        let wage = Wage::parse("15").unwrap();
        assert_eq!(format!("{:.2}", wage.earned(3661)), "15.25");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(WageError::Negative.to_string(), "wage cannot be negative");
        assert_eq!(
            WageError::NotANumber("x".into()).to_string(),
            "'x' is not a number"
        );
    }
}
