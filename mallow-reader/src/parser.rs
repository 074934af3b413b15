// mallow-reader - Parser for Mallow
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Recursive descent parser for Mallow source code.
//!
//! Converts tokens into `MallowVal` trees without evaluating anything.
//! The reader macros `'`, `` ` ``, `~` and `~@` expand at parse time into
//! `(quote x)`, `(quasiquote x)`, `(unquote x)` and `(splice-unquote x)`.

use std::fmt;

use im::Vector;

use crate::lexer::{Lexer, LexerError, Token};
use crate::symbol::Symbol;
use crate::value::MallowVal;

/// Parser error with position information.
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parse error at {}:{}: {}",
            self.line, self.column, self.message
        )
    }
}

impl std::error::Error for ParseError {}

impl From<LexerError> for ParseError {
    fn from(e: LexerError) -> Self {
        ParseError {
            message: e.message,
            line: e.line,
            column: e.column,
        }
    }
}

/// The parser converts tokens into `MallowVal` trees.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    line: usize,
    column: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given source code.
    pub fn new(source: &'a str) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(source);
        let line = lexer.line();
        let column = lexer.column();
        let current = lexer.next_token()?;
        Ok(Parser {
            lexer,
            current,
            line,
            column,
        })
    }

    /// Parse a single form from the source.
    /// Returns None if at end of input (empty input is not an error).
    pub fn parse(&mut self) -> Result<Option<MallowVal>, ParseError> {
        if matches!(self.current, Token::Eof) {
            return Ok(None);
        }
        let val = self.parse_form()?;
        Ok(Some(val))
    }

    /// Parse all forms from the source.
    pub fn parse_all(&mut self) -> Result<Vec<MallowVal>, ParseError> {
        let mut forms = Vec::new();
        while let Some(form) = self.parse()? {
            forms.push(form);
        }
        Ok(forms)
    }

    /// Parse a string and return the first form (convenience function).
    pub fn parse_str(source: &str) -> Result<Option<MallowVal>, ParseError> {
        let mut parser = Parser::new(source)?;
        parser.parse()
    }

    // ========================================================================
    // Internal parsing methods
    // ========================================================================

    fn advance(&mut self) -> Result<Token, ParseError> {
        let prev = std::mem::replace(&mut self.current, Token::Eof);
        self.line = self.lexer.line();
        self.column = self.lexer.column();
        self.current = self.lexer.next_token()?;
        Ok(prev)
    }

    fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError {
            message: message.into(),
            line: self.line,
            column: self.column,
        }
    }

    fn parse_form(&mut self) -> Result<MallowVal, ParseError> {
        match &self.current {
            Token::Nil => {
                self.advance()?;
                Ok(MallowVal::Nil)
            }
            Token::True => {
                self.advance()?;
                Ok(MallowVal::Bool(true))
            }
            Token::False => {
                self.advance()?;
                Ok(MallowVal::Bool(false))
            }
            Token::Int(n) => {
                let n = *n;
                self.advance()?;
                Ok(MallowVal::Int(n))
            }
            Token::String(s) => {
                let s = s.clone();
                self.advance()?;
                Ok(MallowVal::string(s))
            }
            Token::Symbol(s) => {
                let sym = Symbol::intern(s);
                self.advance()?;
                Ok(MallowVal::Symbol(sym))
            }
            Token::LParen => {
                self.advance()?;
                self.parse_list()
            }
            Token::RParen => Err(self.error("unbalanced parenthesis: unexpected ')'")),
            Token::Quote => self.parse_quote_form("quote"),
            Token::Quasiquote => self.parse_quote_form("quasiquote"),
            Token::Unquote => self.parse_quote_form("unquote"),
            Token::UnquoteSplice => self.parse_quote_form("splice-unquote"),
            Token::Eof => Err(self.error("unexpected end of input")),
        }
    }

    fn parse_list(&mut self) -> Result<MallowVal, ParseError> {
        let mut items: Vector<MallowVal> = Vector::new();
        loop {
            match &self.current {
                Token::RParen => {
                    self.advance()?;
                    return Ok(MallowVal::List(items));
                }
                Token::Eof => {
                    return Err(self.error("unbalanced parenthesis: expected ')'"));
                }
                _ => items.push_back(self.parse_form()?),
            }
        }
    }

    /// `'x` and friends become a two-element list headed by `head`.
    fn parse_quote_form(&mut self, head: &str) -> Result<MallowVal, ParseError> {
        self.advance()?; // skip the reader-macro token
        let form = self.parse_form()?;
        Ok(MallowVal::list(vec![MallowVal::symbol(head), form]))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_one(source: &str) -> MallowVal {
        Parser::parse_str(source).unwrap().unwrap()
    }

    #[test]
    fn test_scalars() {
        assert_eq!(parse_one("42"), MallowVal::int(42));
        assert_eq!(parse_one("-7"), MallowVal::int(-7));
        assert_eq!(parse_one("nil"), MallowVal::Nil);
        assert_eq!(parse_one("true"), MallowVal::Bool(true));
        assert_eq!(parse_one("false"), MallowVal::Bool(false));
        assert_eq!(parse_one("foo"), MallowVal::symbol("foo"));
        assert_eq!(parse_one(r#""hi\n""#), MallowVal::string("hi\n"));
    }

    #[test]
    fn test_lists() {
        assert_eq!(
            parse_one("(+ 1 2)"),
            MallowVal::list(vec![
                MallowVal::symbol("+"),
                MallowVal::int(1),
                MallowVal::int(2),
            ])
        );
        assert_eq!(parse_one("()"), MallowVal::empty_list());
    }

    #[test]
    fn test_nested_lists() {
        assert_eq!(
            parse_one("(a (b (c)))"),
            MallowVal::list(vec![
                MallowVal::symbol("a"),
                MallowVal::list(vec![
                    MallowVal::symbol("b"),
                    MallowVal::list(vec![MallowVal::symbol("c")]),
                ]),
            ])
        );
    }

    #[test]
    fn test_reader_macros_expand_to_quote_forms() {
        assert_eq!(
            parse_one("'x"),
            MallowVal::list(vec![MallowVal::symbol("quote"), MallowVal::symbol("x")])
        );
        assert_eq!(
            parse_one("`x"),
            MallowVal::list(vec![MallowVal::symbol("quasiquote"), MallowVal::symbol("x")])
        );
        assert_eq!(
            parse_one("~x"),
            MallowVal::list(vec![MallowVal::symbol("unquote"), MallowVal::symbol("x")])
        );
        assert_eq!(
            parse_one("~@x"),
            MallowVal::list(vec![
                MallowVal::symbol("splice-unquote"),
                MallowVal::symbol("x"),
            ])
        );
    }

    #[test]
    fn test_quote_nests() {
        assert_eq!(
            parse_one("'(1 2)"),
            MallowVal::list(vec![
                MallowVal::symbol("quote"),
                MallowVal::list(vec![MallowVal::int(1), MallowVal::int(2)]),
            ])
        );
    }

    #[test]
    fn test_empty_input_is_none() {
        assert_eq!(Parser::parse_str("").unwrap(), None);
        assert_eq!(Parser::parse_str("  ; just a comment").unwrap(), None);
    }

    #[test]
    fn test_multiple_forms() {
        let forms = Parser::new("1 2 3").unwrap().parse_all().unwrap();
        assert_eq!(
            forms,
            vec![MallowVal::int(1), MallowVal::int(2), MallowVal::int(3)]
        );
    }

    #[test]
    fn test_unbalanced_parens() {
        assert!(Parser::parse_str("(1 2").is_err());
        assert!(Parser::parse_str(")").is_err());
    }

    #[test]
    fn test_dangling_quote() {
        assert!(Parser::parse_str("'").is_err());
    }
}
