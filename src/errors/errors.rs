use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{internal_error} at {position}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// The offending text, as scanned up to the point every recognizer trapped.
    pub fn get_lexeme(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedLexeme { lexeme } => lexeme,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedLexeme { .. } => "UnrecognisedLexeme",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedLexeme { lexeme } => lexeme_tip(lexeme),
        }
    }
}

fn lexeme_tip(lexeme: &str) -> ErrorTip {
    let first = lexeme.chars().next();

    match first {
        Some('\'') => ErrorTip::Suggestion(format!(
            "Invalid literal: `{}`, literals hold only letters and digits and end with `'`",
            lexeme
        )),
        Some('.') => ErrorTip::Suggestion(format!(
            "Invalid number: `{}`, add a digit before the decimal point",
            lexeme
        )),
        Some(c) if c.is_ascii_digit() && lexeme.contains('.') => ErrorTip::Suggestion(format!(
            "Invalid number: `{}`, add a digit after the decimal point",
            lexeme
        )),
        _ => ErrorTip::None,
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unrecognised lexeme: {lexeme:?}")]
    UnrecognisedLexeme { lexeme: String },
}
