//! boolean expression evaluator
//!
//! a tiny recursive-descent parser over the closed grammar the solver
//! reduces everything to: `true`, `false`, `&&`, `||` and parentheses,
//! with `&&` binding tighter than `||`. nothing else is accepted, so
//! unresolved fragments left behind by the solver surface as errors
//! here (and become `false` at the fail-closed boundary).

use anyhow::{bail, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    True,
    False,
    And,
    Or,
    Open,
    Close,
}

/// evaluate a reduced expression
pub fn eval(text: &str) -> Result<bool> {
    let tokens = tokenize(text)?;
    let mut parser = Parser { tokens, pos: 0 };
    let value = parser.expr()?;
    if parser.pos != parser.tokens.len() {
        bail!("trailing input after expression");
    }
    Ok(value)
}

fn tokenize(text: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let chars: Vec<char> = text.chars().collect();
    let mut pos = 0;

    while pos < chars.len() {
        match chars[pos] {
            c if c.is_whitespace() => pos += 1,
            '(' => {
                tokens.push(Token::Open);
                pos += 1;
            }
            ')' => {
                tokens.push(Token::Close);
                pos += 1;
            }
            '&' => {
                if chars.get(pos + 1) == Some(&'&') {
                    tokens.push(Token::And);
                    pos += 2;
                } else {
                    bail!("lone '&' at position {}", pos);
                }
            }
            '|' => {
                if chars.get(pos + 1) == Some(&'|') {
                    tokens.push(Token::Or);
                    pos += 2;
                } else {
                    bail!("lone '|' at position {}", pos);
                }
            }
            c if c.is_ascii_alphabetic() => {
                let start = pos;
                while pos < chars.len() && chars[pos].is_ascii_alphabetic() {
                    pos += 1;
                }
                let word: String = chars[start..pos].iter().collect();
                match word.as_str() {
                    "true" => tokens.push(Token::True),
                    "false" => tokens.push(Token::False),
                    other => bail!("unexpected word '{}'", other),
                }
            }
            other => bail!("unexpected character '{}'", other),
        }
    }

    Ok(tokens)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    // expr := term ('||' term)*
    fn expr(&mut self) -> Result<bool> {
        let mut value = self.term()?;
        while self.peek() == Some(Token::Or) {
            self.pos += 1;
            let rhs = self.term()?;
            value = value || rhs;
        }
        Ok(value)
    }

    // term := atom ('&&' atom)*
    fn term(&mut self) -> Result<bool> {
        let mut value = self.atom()?;
        while self.peek() == Some(Token::And) {
            self.pos += 1;
            let rhs = self.atom()?;
            value = value && rhs;
        }
        Ok(value)
    }

    // atom := 'true' | 'false' | '(' expr ')'
    fn atom(&mut self) -> Result<bool> {
        match self.peek() {
            Some(Token::True) => {
                self.pos += 1;
                Ok(true)
            }
            Some(Token::False) => {
                self.pos += 1;
                Ok(false)
            }
            Some(Token::Open) => {
                self.pos += 1;
                let value = self.expr()?;
                if self.peek() != Some(Token::Close) {
                    bail!("missing ')'");
                }
                self.pos += 1;
                Ok(value)
            }
            Some(token) => bail!("unexpected token {:?}", token),
            None => bail!("unexpected end of expression"),
        }
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eval_literals() {
        assert!(eval("true").unwrap());
        assert!(!eval("false").unwrap());
        assert!(eval("  true  ").unwrap());
    }

    #[test]
    fn test_eval_and_or() {
        assert!(eval("true&&true").unwrap());
        assert!(!eval("true&&false").unwrap());
        assert!(eval("true||false").unwrap());
        assert!(!eval("false||false").unwrap());
    }

    #[test]
    fn test_and_binds_tighter_than_or() {
        // true || (false && false), not (true || false) && false
        assert!(eval("true||false&&false").unwrap());
        assert!(!eval("false&&true||false").unwrap());
    }

    #[test]
    fn test_parentheses_override() {
        assert!(!eval("(true||false)&&false").unwrap());
        assert!(eval("((true))").unwrap());
        assert!(eval("(true&&true)||false").unwrap());
    }

    #[test]
    fn test_eval_rejects_garbage() {
        assert!(eval("").is_err());
        assert!(eval("maybe").is_err());
        assert!(eval("true &").is_err());
        assert!(eval("true | false").is_err());
        assert!(eval("true false").is_err());
        assert!(eval("(true").is_err());
        assert!(eval("true)").is_err());
        assert!(eval("()").is_err());
        assert!(eval("1 > 0").is_err());
    }

    #[test]
    fn test_empty_group_tokens_rejected() {
        // solver output can contain "()" groups from empty segments
        assert!(eval("(true&&true)()").is_err());
    }
}
