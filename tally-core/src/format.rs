//! Numeric display formatting
//!
//! All arithmetic runs in f64; these helpers turn results into the text
//! the displays show. Non-finite values render as the error sentinel so
//! a NaN can never leak into a display region.

/// Text shown in place of a numeric result when evaluation fails
pub const ERROR_DISPLAY: &str = "Error";

/// Stringify a result in general/shortest form.
///
/// Integral values render without a fractional part, very large or very
/// small magnitudes switch to scientific notation, everything else uses
/// the shortest round-trip representation.
pub fn format_number(n: f64) -> String {
    if n.is_nan() || n.is_infinite() {
        return ERROR_DISPLAY.to_string();
    }

    if n == n.trunc() && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else if n.abs() >= 1e15 || n.abs() < 1e-6 {
        format!("{:e}", n)
    } else {
        format!("{}", n)
    }
}

/// Format with a fixed number of significant digits.
///
/// Follows printf `%g` conventions: fixed notation in the normal range,
/// scientific notation when the exponent falls below -4 or reaches the
/// digit count, trailing zeros trimmed either way.
pub fn format_sigfigs(n: f64, digits: usize) -> String {
    debug_assert!(digits > 0);
    if n.is_nan() || n.is_infinite() {
        return ERROR_DISPLAY.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let exponent = n.abs().log10().floor() as i32;
    if exponent < -4 || exponent >= digits as i32 {
        let s = format!("{:.*e}", digits - 1, n);
        trim_mantissa(&s)
    } else {
        let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
        let s = format!("{:.*}", decimals, n);
        trim_fraction(&s)
    }
}

/// Cap a display string at `width` characters.
///
/// Display-only: callers keep the untruncated value.
pub fn truncate_display(s: &str, width: usize) -> String {
    s.chars().take(width).collect()
}

fn trim_fraction(s: &str) -> String {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s.to_string()
    }
}

fn trim_mantissa(s: &str) -> String {
    match s.split_once('e') {
        Some((mantissa, exp)) => format!("{}e{}", trim_fraction(mantissa), exp),
        None => s.to_string(),
    }
}
