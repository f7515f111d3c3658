//! Tally Math - Logarithm helper
//!
//! Stateless, one-shot logarithm computation for the logarithm tab:
//! natural log, base 10, or base 2, with an explicit domain check.

mod log;

pub use log::{compute_log, log_text, LogError, LogKind, ALL_KINDS, RESULT_DIGITS};
