use std::fmt::Display;

use thiserror::Error;

/// Select response fields whose value can be malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Flags,
    PermanentFlags,
    HighestModSeq,
    UidNext,
    UidValidity,
    Unseen,
    Exists,
    Recent,
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Flags => write!(f, "FLAGS"),
            Field::PermanentFlags => write!(f, "PERMANENTFLAGS"),
            Field::HighestModSeq => write!(f, "HIGHESTMODSEQ"),
            Field::UidNext => write!(f, "UIDNEXT"),
            Field::UidValidity => write!(f, "UIDVALIDITY"),
            Field::Unseen => write!(f, "UNSEEN"),
            Field::Exists => write!(f, "EXISTS"),
            Field::Recent => write!(f, "RECENT"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("malformed {field} in response line {line:?}")]
pub struct MalformedField {
    field: Field,
    line: String,
}

impl MalformedField {
    pub(super) fn new(field: Field, line: &str) -> Self {
        Self {
            field,
            line: line.to_string(),
        }
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn line(&self) -> &str {
        &self.line
    }
}
