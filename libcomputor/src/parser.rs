//! Parses an equation into its reduced [Polynomial].

mod errors;
pub use errors::{ParseError, ParseErrors};

use crate::common::Span;
use crate::poly::{CoefficientMap, Polynomial};
use crate::scanner::scan;
use crate::scanner::types::{Token, TokenType};

use tracing::debug;

/// Parses an equation such as `"5 + 4*X + X^2 = X^2"` and reduces it by moving every term to the
/// left side.
///
/// Fails with [InvalidFormat](ParseError::InvalidFormat) unless the equation has exactly one `=`,
/// and with [InvalidTerm](ParseError::InvalidTerm) on the first term that is not of the form
/// `[sign] [coefficient] [*] [X[^power]]`.
pub fn parse_equation(equation: &str) -> Result<Polynomial, ParseError> {
    let tokens = scan(equation);
    let parser = EquationParser {
        input: equation,
        coefficients: CoefficientMap::new(),
    };
    parser.parse(tokens)
}

struct EquationParser<'a> {
    input: &'a str,
    coefficients: CoefficientMap,
}

/// The two sides of an equation, and the sign their terms are accumulated with.
#[derive(Copy, Clone, Debug)]
enum Side {
    Left,
    Right,
}

impl Side {
    fn sign(self) -> f64 {
        match self {
            Side::Left => 1.,
            Side::Right => -1.,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

impl<'a> EquationParser<'a> {
    fn parse(mut self, tokens: Vec<Token>) -> Result<Polynomial, ParseError> {
        let tokens: Vec<Token> = tokens
            .into_iter()
            .filter(|tok| tok.ty != TokenType::EOF)
            .collect();

        let equals: Vec<usize> = tokens
            .iter()
            .enumerate()
            .filter(|(_, tok)| tok.ty == TokenType::Equal)
            .map(|(i, _)| i)
            .collect();
        let eq = match equals.as_slice() {
            [eq] => *eq,
            [] => {
                return Err(ParseError::InvalidFormat {
                    equals: 0,
                    span: Span::from(0..self.input.len()),
                })
            }
            [_, second, ..] => {
                return Err(ParseError::InvalidFormat {
                    equals: equals.len(),
                    span: tokens[*second].span,
                })
            }
        };

        let eq_span = tokens[eq].span;
        self.parse_side(&tokens[..eq], Side::Left, eq_span)?;
        self.parse_side(&tokens[eq + 1..], Side::Right, eq_span)?;

        let polynomial = Polynomial::new(self.coefficients);
        debug!(degree = polynomial.degree(), reduced = %polynomial, "parsed equation");
        Ok(polynomial)
    }

    /// Splits one side into signed terms and accumulates each of them.
    fn parse_side(&mut self, tokens: &[Token], side: Side, eq_span: Span) -> Result<(), ParseError> {
        if tokens.is_empty() {
            return Err(ParseError::InvalidTerm {
                term: String::new(),
                reason: format!("the {} side of the equation is empty", side.name()),
                span: eq_span,
            });
        }

        let mut start = 0;
        while start < tokens.len() {
            // A term runs from its sign up to the next sign.
            let end = tokens[start + 1..]
                .iter()
                .position(|tok| tok.ty.is_sign())
                .map(|i| start + 1 + i)
                .unwrap_or_else(|| tokens.len());
            self.accumulate_term(&tokens[start..end], side)?;
            start = end;
        }
        Ok(())
    }

    fn accumulate_term(&mut self, term: &[Token], side: Side) -> Result<(), ParseError> {
        let (term_sign, body) = match term.split_first() {
            Some((first, rest)) if first.ty == TokenType::Minus => (-1., rest),
            Some((first, rest)) if first.ty == TokenType::Plus => (1., rest),
            _ => (1., term),
        };

        let span = match (term.first(), term.last()) {
            (Some(first), Some(last)) => first.span.to(last.span),
            _ => Span::default(),
        };
        let input = self.input;
        let invalid_term = |reason| ParseError::InvalidTerm {
            term: input.get(span.lo..span.hi).unwrap_or("").to_owned(),
            reason,
            span,
        };

        let (coefficient, power) = read_term(body).map_err(invalid_term)?;

        let value = coefficient * term_sign * side.sign();
        debug!(power, value, side = side.name(), "accumulating term");
        let sum = self.coefficients.entry(power).or_insert(0.);
        *sum += value;
        if !sum.is_finite() {
            return Err(invalid_term(format!(
                "the coefficient of X^{} is too large",
                power
            )));
        }
        Ok(())
    }
}

/// Reads an unsigned term body of the form `[coefficient] [*] [X[^power]]` into a
/// `(coefficient, power)` pair, or returns why it cannot.
fn read_term(body: &[Token]) -> Result<(f64, u32), String> {
    if let Some(tok) = body
        .iter()
        .find(|tok| matches!(tok.ty, TokenType::Invalid(_)))
    {
        return Err(unexpected(tok));
    }

    let mut rest = body.iter().peekable();

    let coefficient = match rest.peek().map(|tok| &tok.ty) {
        Some(TokenType::Number(_, Some(value))) if value.is_finite() => {
            let value = *value;
            rest.next();
            Some(value)
        }
        Some(TokenType::Number(text, Some(_))) => {
            return Err(format!("`{}` is not a finite number", text))
        }
        Some(TokenType::Number(text, None)) => return Err(format!("`{}` is not a number", text)),
        _ => None,
    };

    let saw_mult = match rest.peek().map(|tok| &tok.ty) {
        Some(TokenType::Mult) => {
            rest.next();
            true
        }
        _ => false,
    };

    let power = match rest.peek().map(|tok| &tok.ty) {
        Some(TokenType::Variable) => {
            rest.next();
            match rest.peek().map(|tok| &tok.ty) {
                Some(TokenType::Exp) => {
                    rest.next();
                    read_power(rest.next())?
                }
                _ => 1,
            }
        }
        _ if saw_mult => return Err("expected `X` after `*`".to_owned()),
        _ if coefficient.is_none() => {
            return Err(match rest.peek() {
                Some(tok) => unexpected(tok),
                None => "expected a coefficient or `X`".to_owned(),
            })
        }
        _ => 0,
    };

    if let Some(tok) = rest.next() {
        return Err(unexpected(tok));
    }

    Ok((coefficient.unwrap_or(1.), power))
}

fn read_power(tok: Option<&Token>) -> Result<u32, String> {
    let bad_power = || "expected a non-negative integer power after `^`".to_owned();
    match tok.map(|tok| &tok.ty) {
        Some(TokenType::Number(text, _)) if text.chars().all(|c| c.is_ascii_digit()) => {
            text.parse::<u32>().map_err(|_| bad_power())
        }
        _ => Err(bad_power()),
    }
}

fn unexpected(tok: &Token) -> String {
    match &tok.ty {
        TokenType::Invalid(c) => format!("unexpected character `{}`", c),
        ty => format!("unexpected `{}`", ty),
    }
}
