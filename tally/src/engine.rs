//! Keypad state machine
//!
//! Accumulates keystrokes into a two-part expression: `current` is the
//! operand being typed, `total` the expression gathered so far. An
//! operator key flushes `current` into `total`; equals evaluates the
//! whole string. Entry is unvalidated: malformed sequences are
//! accepted here and surface as the error sentinel at evaluation time.

use crate::ast::BinOp;
use crate::evaluate_str;
use serde::{Deserialize, Serialize};
use tally_core::{format_number, truncate_display, CalcError, ERROR_DISPLAY};

/// Maximum characters the entry display shows
pub const DISPLAY_WIDTH: usize = 11;

/// One keypad or keyboard input event
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Key {
    /// `0`-`9` or `.`
    Digit(char),
    Operator(BinOp),
    Equals,
    Percent,
    Clear,
    ClearEntry,
    Backspace,
}

impl Key {
    /// Map a typed character to a key, the way the keyboard handler
    /// mirrors the keypad buttons. Returns `None` for anything the
    /// calculator has no button for.
    pub fn from_char(c: char) -> Option<Key> {
        match c {
            '0'..='9' | '.' => Some(Key::Digit(c)),
            '=' => Some(Key::Equals),
            '%' => Some(Key::Percent),
            _ => BinOp::from_symbol(c).map(Key::Operator),
        }
    }
}

/// The two-part expression state behind the standard calculator.
///
/// An owned instance per calculator session; nothing here is global,
/// so independent instances never interact.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpressionState {
    total: String,
    current: String,
}

impl ExpressionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatch one input event to the matching operation
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Digit(c) => self.push_digit(c),
            Key::Operator(op) => self.push_operator(op),
            Key::Equals => self.evaluate(),
            Key::Percent => self.percent(),
            Key::Clear => self.clear(),
            Key::ClearEntry => self.clear_entry(),
            Key::Backspace => self.backspace(),
        }
    }

    /// Append a digit or decimal point to the entry.
    ///
    /// No validation: duplicate points and leading zeros are accepted
    /// here and rejected (if at all) when the expression is evaluated.
    pub fn push_digit(&mut self, token: char) {
        debug_assert!(token.is_ascii_digit() || token == '.');
        self.current.push(token);
    }

    /// Append an operator and flush the entry into the total.
    ///
    /// The entry is not required to be non-empty, so consecutive
    /// operators can accumulate; they surface as evaluation errors.
    pub fn push_operator(&mut self, op: BinOp) {
        self.current.push(op.symbol());
        self.total.push_str(&self.current);
        self.current.clear();
    }

    /// Reset both the total and the entry
    pub fn clear(&mut self) {
        self.total.clear();
        self.current.clear();
    }

    /// Reset only the entry
    pub fn clear_entry(&mut self) {
        self.current.clear();
    }

    /// Remove the last entry character; never reaches into the total
    pub fn backspace(&mut self) {
        self.current.pop();
    }

    /// Turn the entry into a percentage.
    ///
    /// With an operator pending the entry becomes that percentage of
    /// the accumulated value ("200 +" then "10" gives 20); otherwise it
    /// is simply divided by 100. Any parse or evaluation failure puts
    /// the error sentinel in the entry.
    pub fn percent(&mut self) {
        if self.current.is_empty() {
            return;
        }
        self.current = match self.percent_value() {
            Ok(v) => format_number(v),
            Err(_) => ERROR_DISPLAY.to_string(),
        };
    }

    fn percent_value(&self) -> Result<f64, CalcError> {
        let entry: f64 = self
            .current
            .parse()
            .map_err(|_| CalcError::invalid_number(self.current.as_str()))?;
        let fraction = entry / 100.0;
        match self.pending_base()? {
            Some(base) => Ok(base * fraction),
            None => Ok(fraction),
        }
    }

    /// Value accumulated ahead of a trailing operator, if there is one
    fn pending_base(&self) -> Result<Option<f64>, CalcError> {
        let Some(last) = self.total.chars().last() else {
            return Ok(None);
        };
        if BinOp::from_symbol(last).is_none() {
            return Ok(None);
        }
        let head = &self.total[..self.total.len() - last.len_utf8()];
        Ok(Some(evaluate_str(head)?))
    }

    /// Evaluate the full expression.
    ///
    /// On success the result becomes the new entry and the total
    /// resets. On failure the entry shows the error sentinel and the
    /// total keeps the failed expression text.
    pub fn evaluate(&mut self) {
        self.total.push_str(&self.current);
        match evaluate_str(&self.total) {
            Ok(v) => {
                self.current = format_number(v);
                self.total.clear();
            }
            Err(_) => {
                self.current = ERROR_DISPLAY.to_string();
            }
        }
    }

    /// Raw accumulated expression
    pub fn total(&self) -> &str {
        &self.total
    }

    /// Raw entry text
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Entry display, capped at [`DISPLAY_WIDTH`] characters.
    /// Truncation is presentation-only; the stored entry is untouched.
    pub fn current_display(&self) -> String {
        truncate_display(&self.current, DISPLAY_WIDTH)
    }

    /// Accumulated-expression display with prettified operators
    pub fn total_display(&self) -> String {
        let mut out = String::with_capacity(self.total.len() * 3);
        for c in self.total.chars() {
            match c {
                '/' => out.push_str(" ÷ "),
                '*' => out.push_str(" × "),
                '+' => out.push_str(" + "),
                '-' => out.push_str(" - "),
                other => out.push(other),
            }
        }
        out
    }
}
