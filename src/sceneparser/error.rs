use std::fmt::{self, Display, Formatter};
use thiserror::Error;
use crate::sceneparser::factory::ContainerKind;
use crate::sceneparser::value::ValueKind;

/// 1-based position of the character that triggered an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Location {
    pub line   : usize,
    pub column : usize
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorCode {
    #[error("expected '{expected}', found '{found}'")]
    ExpectedCharacter { expected: char, found: char },

    #[error("invalid {container_kind} key \"{key}\"")]
    UnknownKey { container_kind: ContainerKind, key: String },

    #[error("key \"{key}\" appears more than once")]
    DuplicateKey { key: String },

    #[error("scene already has a camera")]
    DuplicateCamera,

    #[error("malformed {kind} literal: {reason}")]
    MalformedLiteral { kind: ValueKind, reason: String },

    #[error("unexpected end of input")]
    UnexpectedEndOfInput
}

/// A parse failure together with where in the input it happened.
///
/// Parsing is fail-fast: the first error aborts the whole call and no
/// partially built tree is returned alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{location}: {code}")]
pub struct Error {
    pub location : Location,
    pub code     : ErrorCode
}

impl Error {
    pub fn new(location: Location, code: ErrorCode) -> Self {
        Self { location, code }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
