//! Expression evaluator
//!
//! Walks the AST over f64. Division by a zero divisor is reported as an
//! error rather than producing an infinity, so it reaches the display
//! as the error sentinel and never as "inf".

use crate::ast::{BinOp, Expr, UnaryOp};
use tally_core::CalcError;

/// Evaluate an expression tree
pub fn eval(expr: &Expr) -> Result<f64, CalcError> {
    match expr {
        Expr::Number(n) => Ok(*n),
        Expr::UnaryOp(op, inner) => {
            let value = eval(inner)?;
            Ok(match op {
                UnaryOp::Neg => -value,
                UnaryOp::Pos => value,
            })
        }
        Expr::BinaryOp(left, op, right) => {
            let l = eval(left)?;
            let r = eval(right)?;
            apply(*op, l, r)
        }
    }
}

fn apply(op: BinOp, l: f64, r: f64) -> Result<f64, CalcError> {
    match op {
        BinOp::Add => Ok(l + r),
        BinOp::Sub => Ok(l - r),
        BinOp::Mul => Ok(l * r),
        BinOp::Div => {
            if r == 0.0 {
                Err(CalcError::DivisionByZero)
            } else {
                Ok(l / r)
            }
        }
    }
}
