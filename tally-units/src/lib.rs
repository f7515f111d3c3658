//! Tally Units - Length Conversion
//!
//! Stateless, one-shot conversions between the six length units the
//! conversion tab offers, pipelined through meters as the base unit.

mod convert;
mod unit;

pub use convert::{convert, convert_text, from_meters, to_meters, RESULT_DIGITS};
pub use unit::{ConversionError, LengthUnit, ALL_UNITS};
