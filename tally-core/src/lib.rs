//! Tally Core - Fundamental types
//!
//! This crate provides the pieces shared by every Tally tool:
//! - `CalcError`: calculation errors that propagate as values
//! - display formatting: shortest-form stringification, significant
//!   digits, display-width truncation

mod error;
mod format;

pub use error::CalcError;
pub use format::{format_number, format_sigfigs, truncate_display, ERROR_DISPLAY};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{format_number, format_sigfigs, CalcError, ERROR_DISPLAY};
}
