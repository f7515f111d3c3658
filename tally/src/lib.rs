//! Tally - the standard-calculator expression engine
//!
//! The engine accumulates keystrokes into a two-part expression state
//! (`total` / `current`) and evaluates the final string with a
//! dedicated arithmetic parser: float literals, the four operators
//! with standard precedence, unary signs. Everything a general
//! expression evaluator would additionally accept is a syntax error
//! here by construction.

mod ast;
mod engine;
mod eval;
mod parser;

pub use ast::{BinOp, Expr, UnaryOp};
pub use engine::{ExpressionState, Key, DISPLAY_WIDTH};
pub use eval::eval;
pub use parser::parse;

use tally_core::CalcError;

/// Parse and evaluate an expression string in one step
pub fn evaluate_str(input: &str) -> Result<f64, CalcError> {
    eval(&parse(input)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::ERROR_DISPLAY;

    #[test]
    fn test_evaluation_is_deterministic() {
        let first = evaluate_str("2+3*4-1/8").unwrap();
        let second = evaluate_str("2+3*4-1/8").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_precedence() {
        assert_eq!(evaluate_str("2+3*4").unwrap(), 14.0);
    }

    #[test]
    fn test_division_by_zero_is_an_error_not_a_crash() {
        assert_eq!(evaluate_str("5/0"), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_keypad_round_trip() {
        // same sequence, fresh state, same result
        for _ in 0..2 {
            let mut state = ExpressionState::new();
            for c in "7.5*8=".chars() {
                state.press(Key::from_char(c).unwrap());
            }
            assert_eq!(state.current(), "60");
        }
    }

    #[test]
    fn test_result_feeds_next_expression() {
        let mut state = ExpressionState::new();
        for c in "6*7=".chars() {
            state.press(Key::from_char(c).unwrap());
        }
        assert_eq!(state.current(), "42");

        // result stays in the entry; chaining an operator carries it on
        for c in "+8=".chars() {
            state.press(Key::from_char(c).unwrap());
        }
        assert_eq!(state.current(), "50");
    }

    #[test]
    fn test_error_sentinel_never_panics_follow_up() {
        let mut state = ExpressionState::new();
        for c in "5/0=+2=".chars() {
            state.press(Key::from_char(c).unwrap());
        }
        // "Error" is not a number, so the follow-up also fails cleanly
        assert_eq!(state.current(), ERROR_DISPLAY);
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(Key::from_char('7'), Some(Key::Digit('7')));
        assert_eq!(Key::from_char('.'), Some(Key::Digit('.')));
        assert_eq!(Key::from_char('*'), Some(Key::Operator(BinOp::Mul)));
        assert_eq!(Key::from_char('='), Some(Key::Equals));
        assert_eq!(Key::from_char('%'), Some(Key::Percent));
        assert_eq!(Key::from_char('x'), None);
    }
}
