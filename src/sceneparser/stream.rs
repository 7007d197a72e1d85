use regex::Regex;
use lazy_static::lazy_static;
use crate::core::dotscene::Float;
use crate::sceneparser::error::{Error, ErrorCode, Location, Result};
use crate::sceneparser::value::ValueKind;

lazy_static! {
    static ref NUMBER : Regex = Regex::new(r"^[+-]?(\d+([.]\d*)?([eE][+-]?\d+)?|[.]\d+([eE][+-]?\d+)?)").unwrap();
    static ref KEY    : Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*").unwrap();
}

/// Character cursor over scene text. Whitespace between tokens is skipped
/// by every reading method, so callers only ever see significant input.
pub struct Stream<'input> {
    text   : &'input str,
    line   : usize,
    column : usize
}

impl<'input> Stream<'input> {
    pub fn new(text: &'input str) -> Stream<'input> {
        Stream {
            text,
            line   : 1,
            column : 1
        }
    }

    pub fn location(&self) -> Location {
        Location { line: self.line, column: self.column }
    }

    pub fn error(&self, code: ErrorCode) -> Error {
        Error::new(self.location(), code)
    }

    fn advance(&mut self, len: usize) -> &'input str {
        let (consumed, rest) = self.text.split_at(len);

        for c in consumed.chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }

        self.text = rest;
        consumed
    }

    pub fn skip_whitespace(&mut self) {
        let len = self.text.len() - self.text.trim_start().len();
        self.advance(len);
    }

    /// Next significant character, left unconsumed.
    pub fn peek(&mut self) -> Option<char> {
        self.skip_whitespace();
        self.text.chars().next()
    }

    pub fn expect(&mut self, expected: char) -> Result<()> {
        match self.peek() {
            Some(c) if c == expected => {
                self.advance(c.len_utf8());
                Ok(())
            }
            Some(found) => Err(self.error(ErrorCode::ExpectedCharacter { expected, found })),
            None        => Err(self.error(ErrorCode::UnexpectedEndOfInput))
        }
    }

    /// Consumes `c` if it is the next significant character.
    pub fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.advance(c.len_utf8());
            true
        } else {
            false
        }
    }

    /// Bare identifier used as an entry key, or `None` if the next token
    /// is not one.
    pub fn key(&mut self) -> Option<&'input str> {
        self.skip_whitespace();
        let end = KEY.find(self.text)?.end();

        Some(self.advance(end))
    }

    /// Reads one numeric literal. `kind` is the literal being decoded and
    /// only serves to label a failure.
    pub fn number(&mut self, kind: ValueKind) -> Result<Float> {
        self.skip_whitespace();

        let end = match NUMBER.find(self.text) {
            Some(mat) => mat.end(),
            None      => {
                let code = match self.text.chars().next() {
                    Some(c) => ErrorCode::MalformedLiteral {
                        kind,
                        reason: format!("expected a number, found '{}'", c)
                    },
                    None => ErrorCode::UnexpectedEndOfInput
                };

                return Err(self.error(code));
            }
        };

        let location = self.location();
        let s = self.advance(end);

        let v = s.parse::<Float>().map_err(|e| Error::new(location, ErrorCode::MalformedLiteral {
            kind,
            reason: format!("\"{}\": {}", s, e)
        }))?;

        // Overflow parses as inf, which has no literal spelling to print back.
        if !v.is_finite() {
            return Err(Error::new(location, ErrorCode::MalformedLiteral {
                kind,
                reason: format!("\"{}\" is out of range", s)
            }));
        }

        Ok(v)
    }

    /// Text strictly between the next two double quotes. No escapes are
    /// recognised, so the value can never contain a quote itself.
    pub fn quoted(&mut self) -> Result<&'input str> {
        self.expect('"')?;

        match self.text.find('"') {
            Some(end) => {
                let s = self.advance(end);
                self.advance(1);
                Ok(s)
            }
            None => {
                let len = self.text.len();
                self.advance(len);
                Err(self.error(ErrorCode::UnexpectedEndOfInput))
            }
        }
    }
}
