//! Logarithm computation
//!
//! The domain check runs before any computation: a non-positive value
//! is an explicit error, not a NaN discovered afterwards.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tally_core::{format_sigfigs, CalcError};

/// Significant digits the logarithm tab displays
pub const RESULT_DIGITS: usize = 8;

/// Which logarithm to take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogKind {
    Ln,
    Log10,
    Log2,
}

/// Every kind, in selection-list order
pub const ALL_KINDS: [LogKind; 3] = [LogKind::Ln, LogKind::Log10, LogKind::Log2];

impl LogKind {
    /// Display name, matching the selection-list labels
    pub fn name(self) -> &'static str {
        match self {
            LogKind::Ln => "Natural Log (ln)",
            LogKind::Log10 => "Log base 10 (log10)",
            LogKind::Log2 => "Log base 2 (log2)",
        }
    }
}

impl fmt::Display for LogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let short = match self {
            LogKind::Ln => "ln",
            LogKind::Log10 => "log10",
            LogKind::Log2 => "log2",
        };
        write!(f, "{}", short)
    }
}

impl FromStr for LogKind {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ln" | "natural" | "natural log (ln)" => Ok(LogKind::Ln),
            "log10" | "log" | "log base 10 (log10)" => Ok(LogKind::Log10),
            "log2" | "log base 2 (log2)" => Ok(LogKind::Log2),
            _ => Err(LogError::UnknownKind(s.trim().to_string())),
        }
    }
}

/// Compute a logarithm; the value must be strictly positive
pub fn compute_log(value: f64, kind: LogKind) -> Result<f64, CalcError> {
    if !(value > 0.0) {
        return Err(CalcError::NonPositive);
    }
    Ok(match kind {
        LogKind::Ln => value.ln(),
        LogKind::Log10 => value.log10(),
        LogKind::Log2 => value.log2(),
    })
}

/// Run a logarithm request as the logarithm tab does: parse the value
/// and kind texts, compute, format to [`RESULT_DIGITS`] significant
/// digits. Failures come back as errors whose display text is what
/// the result field shows.
pub fn log_text(value: &str, kind: &str) -> Result<String, LogError> {
    let kind: LogKind = kind.parse()?;
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|_| LogError::Calc(CalcError::invalid_number(value)))?;
    let result = compute_log(value, kind)?;
    Ok(format_sigfigs(result, RESULT_DIGITS))
}

/// Errors the logarithm tab can surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogError {
    /// Kind token is not one of ln / log10 / log2
    UnknownKind(String),
    /// Bad value text or domain violation
    Calc(CalcError),
}

impl fmt::Display for LogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogError::UnknownKind(kind) => write!(f, "Unknown log type: {}", kind),
            LogError::Calc(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for LogError {}

impl From<CalcError> for LogError {
    fn from(e: CalcError) -> Self {
        LogError::Calc(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log2_of_eight() {
        assert_eq!(compute_log(8.0, LogKind::Log2).unwrap(), 3.0);
    }

    #[test]
    fn test_log10_of_thousand() {
        assert_eq!(compute_log(1000.0, LogKind::Log10).unwrap(), 3.0);
    }

    #[test]
    fn test_ln_of_e() {
        let result = compute_log(std::f64::consts::E, LogKind::Ln).unwrap();
        assert!((result - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_non_positive_is_domain_error() {
        assert_eq!(compute_log(0.0, LogKind::Ln), Err(CalcError::NonPositive));
        assert_eq!(compute_log(-3.0, LogKind::Log10), Err(CalcError::NonPositive));
        assert_eq!(compute_log(f64::NAN, LogKind::Log2), Err(CalcError::NonPositive));
    }

    #[test]
    fn test_kind_aliases() {
        assert_eq!("ln".parse::<LogKind>().unwrap(), LogKind::Ln);
        assert_eq!("Log10".parse::<LogKind>().unwrap(), LogKind::Log10);
        assert_eq!(
            "Log base 2 (log2)".parse::<LogKind>().unwrap(),
            LogKind::Log2
        );
    }

    #[test]
    fn test_unknown_kind_is_explicit_error() {
        let err = "log7".parse::<LogKind>().unwrap_err();
        assert_eq!(err, LogError::UnknownKind("log7".to_string()));
    }

    #[test]
    fn test_log_text_formats_eight_digits() {
        assert_eq!(log_text("8", "log2").unwrap(), "3");
        assert_eq!(log_text("2", "ln").unwrap(), "0.69314718");
    }

    #[test]
    fn test_log_text_error_texts() {
        assert_eq!(log_text("0", "ln").unwrap_err().to_string(), "Invalid input (must be > 0)");
        assert_eq!(log_text("abc", "ln").unwrap_err().to_string(), "Invalid input");
    }
}
