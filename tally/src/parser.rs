//! Arithmetic expression parser
//!
//! Tokenizer plus recursive descent over the token stream. The grammar
//! is deliberately closed: float literals and the four operators with
//! standard precedence, unary signs allowed in operand position. No
//! parentheses, no identifiers, no function calls; nothing the keypad
//! cannot type.

use crate::ast::{BinOp, Expr, UnaryOp};
use tally_core::CalcError;

/// Parse an expression string to an AST
pub fn parse(input: &str) -> Result<Expr, CalcError> {
    if input.trim().is_empty() {
        return Err(CalcError::syntax("empty expression"));
    }

    let tokens = tokenize(input)?;
    let mut parser = Parser { tokens, pos: 0 };
    let expr = parser.parse_additive()?;
    if parser.pos != parser.tokens.len() {
        return Err(CalcError::syntax("trailing input after expression"));
    }
    Ok(expr)
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Number(f64),
    Op(BinOp),
}

fn tokenize(input: &str) -> Result<Vec<Token>, CalcError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '+' => {
                tokens.push(Token::Op(BinOp::Add));
                chars.next();
            }
            '-' => {
                tokens.push(Token::Op(BinOp::Sub));
                chars.next();
            }
            '*' => {
                tokens.push(Token::Op(BinOp::Mul));
                chars.next();
            }
            '/' => {
                tokens.push(Token::Op(BinOp::Div));
                chars.next();
            }
            '0'..='9' | '.' => {
                let mut end = start;
                while let Some(&(i, d)) = chars.peek() {
                    if d.is_ascii_digit() || d == '.' {
                        end = i + d.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                let text = &input[start..end];
                let value: f64 = text
                    .parse()
                    .map_err(|_| CalcError::syntax(format!("bad number literal '{}'", text)))?;
                tokens.push(Token::Number(value));
            }
            other => {
                return Err(CalcError::syntax(format!("unexpected character '{}'", other)));
            }
        }
    }

    Ok(tokens)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// additive := multiplicative (('+' | '-') multiplicative)*
    fn parse_additive(&mut self) -> Result<Expr, CalcError> {
        let mut left = self.parse_multiplicative()?;
        while let Some(Token::Op(op @ (BinOp::Add | BinOp::Sub))) = self.peek() {
            self.pos += 1;
            let right = self.parse_multiplicative()?;
            left = Expr::BinaryOp(Box::new(left), op, Box::new(right));
        }
        Ok(left)
    }

    /// multiplicative := unary (('*' | '/') unary)*
    fn parse_multiplicative(&mut self) -> Result<Expr, CalcError> {
        let mut left = self.parse_unary()?;
        while let Some(Token::Op(op @ (BinOp::Mul | BinOp::Div))) = self.peek() {
            self.pos += 1;
            let right = self.parse_unary()?;
            left = Expr::BinaryOp(Box::new(left), op, Box::new(right));
        }
        Ok(left)
    }

    /// unary := ('+' | '-')* number
    ///
    /// Signs stack, so sequences like "5*-3" or "2+--3" evaluate.
    fn parse_unary(&mut self) -> Result<Expr, CalcError> {
        match self.advance() {
            Some(Token::Op(BinOp::Add)) => {
                Ok(Expr::UnaryOp(UnaryOp::Pos, Box::new(self.parse_unary()?)))
            }
            Some(Token::Op(BinOp::Sub)) => {
                Ok(Expr::UnaryOp(UnaryOp::Neg, Box::new(self.parse_unary()?)))
            }
            Some(Token::Number(n)) => Ok(Expr::Number(n)),
            Some(Token::Op(op)) => Err(CalcError::syntax(format!(
                "operator '{}' where an operand was expected",
                op.symbol()
            ))),
            None => Err(CalcError::syntax("expression ends with an operator")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_number() {
        assert!(matches!(parse("42").unwrap(), Expr::Number(n) if n == 42.0));
        assert!(matches!(parse("3.14").unwrap(), Expr::Number(n) if n == 3.14));
    }

    #[test]
    fn test_bare_point_literals() {
        // The keypad lets these through; float parsing accepts them
        assert!(matches!(parse(".5").unwrap(), Expr::Number(n) if n == 0.5));
        assert!(matches!(parse("5.").unwrap(), Expr::Number(n) if n == 5.0));
    }

    #[test]
    fn test_double_point_rejected() {
        assert!(matches!(parse("1.2.3"), Err(CalcError::Syntax(_))));
        assert!(matches!(parse("."), Err(CalcError::Syntax(_))));
    }

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(parse(""), Err(CalcError::Syntax(_))));
        assert!(matches!(parse("   "), Err(CalcError::Syntax(_))));
    }

    #[test]
    fn test_trailing_operator_rejected() {
        assert!(matches!(parse("5+"), Err(CalcError::Syntax(_))));
        assert!(matches!(parse("12*"), Err(CalcError::Syntax(_))));
    }

    #[test]
    fn test_operand_position_star_rejected() {
        assert!(matches!(parse("5*/3"), Err(CalcError::Syntax(_))));
        assert!(matches!(parse("*5"), Err(CalcError::Syntax(_))));
    }

    #[test]
    fn test_closed_grammar() {
        // No parentheses, identifiers, or calls, ever
        assert!(matches!(parse("(2+3)"), Err(CalcError::Syntax(_))));
        assert!(matches!(parse("sqrt(4)"), Err(CalcError::Syntax(_))));
        assert!(matches!(parse("2**3"), Err(CalcError::Syntax(_))));
        assert!(matches!(parse("1,2"), Err(CalcError::Syntax(_))));
    }

    #[test]
    fn test_adjacent_numbers_rejected() {
        assert!(matches!(parse("12 34"), Err(CalcError::Syntax(_))));
    }

    #[test]
    fn test_unary_signs_stack() {
        assert!(parse("-5").is_ok());
        assert!(parse("+5").is_ok());
        assert!(parse("2+--3").is_ok());
        assert!(parse("5*-3").is_ok());
    }

    #[test]
    fn test_precedence_shape() {
        // 2+3*4 must parse as 2+(3*4)
        match parse("2+3*4").unwrap() {
            Expr::BinaryOp(left, BinOp::Add, right) => {
                assert!(matches!(*left, Expr::Number(n) if n == 2.0));
                assert!(matches!(*right, Expr::BinaryOp(_, BinOp::Mul, _)));
            }
            other => panic!("unexpected shape: {:?}", other),
        }
    }

    #[test]
    fn test_left_associativity() {
        // 8-2-1 must parse as (8-2)-1
        match parse("8-2-1").unwrap() {
            Expr::BinaryOp(left, BinOp::Sub, right) => {
                assert!(matches!(*left, Expr::BinaryOp(_, BinOp::Sub, _)));
                assert!(matches!(*right, Expr::Number(n) if n == 1.0));
            }
            other => panic!("unexpected shape: {:?}", other),
        }
    }
}
