//! Tokenizes one equation.

pub mod types;

use crate::utils::PeekIter;
use types::*;

/// Scans an equation into a list of tokens terminated by an [EOF](TokenType::EOF) token.
///
/// Scanning never fails; characters that cannot be part of an equation are emitted as
/// [Invalid](TokenType::Invalid) tokens and reported by the parser.
pub fn scan<T: Into<String>>(input: T) -> Vec<Token> {
    let input = input.into();
    let mut scanner = Scanner::new(&input);
    scanner.scan();
    scanner.output
}

struct Scanner {
    input: PeekIter<(usize, char)>,
    end: usize,
    output: Vec<Token>,
}

impl Scanner {
    fn new(input: &str) -> Scanner {
        let chars: Vec<(usize, char)> = input.char_indices().collect();

        Scanner {
            input: PeekIter::new(chars.into_iter()),
            end: input.len(),
            output: Vec::new(),
        }
    }

    fn scan(&mut self) {
        while let Some(&(_, c)) = self.input.peek() {
            match c {
                _ if c.is_whitespace() => {
                    self.input.next();
                }
                _ if c.is_ascii_digit() => self.scan_num(),
                '.' if self.dot_starts_number() => self.scan_num(),
                _ => self.scan_symbol(),
            }
        }

        self.output
            .push(Token::new(TokenType::EOF, self.end..self.end));
    }

    /// A `.` starts a number only when a digit follows it, as in `.5`.
    fn dot_starts_number(&mut self) -> bool {
        let next = self.input.peek_map_n(2, |&(_, c)| c);
        matches!(next.get(1), Some(c) if c.is_ascii_digit())
    }

    fn scan_symbol(&mut self) {
        use TokenType::*;
        let (lo, c) = match self.input.next() {
            Some(next) => next,
            None => return,
        };
        let ty = match c {
            '+' => Plus,
            '-' => Minus,
            '*' => Mult,
            '^' => Exp,
            '=' => Equal,
            'x' | 'X' => Variable,
            c => Invalid(c.to_string()),
        };
        self.output.push(Token::new(ty, lo..lo + c.len_utf8()));
    }

    fn scan_num(&mut self) {
        let lo = match self.input.peek() {
            Some(&(lo, _)) => lo,
            None => return,
        };
        let text: String = self
            .input
            .collect_while::<_, Vec<_>>(|&(_, c)| c.is_ascii_digit() || c == '.')
            .into_iter()
            .map(|(_, c)| c)
            .collect();
        let value = text.parse::<f64>().ok();
        let hi = lo + text.len();
        self.output
            .push(Token::new(TokenType::Number(text, value), lo..hi));
    }
}
