use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
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

    pub fn get_line(&self) -> usize {
        self.position.line
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// The offending character, for errors raised while scanning.
    pub fn character(&self) -> Option<char> {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { character } => Some(*character),
            _ => None,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::InvalidPattern { .. } => "InvalidPattern",
            ErrorImpl::InvalidCatalogue { .. } => "InvalidCatalogue",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => ErrorTip::None,
            ErrorImpl::InvalidPattern { pattern, .. } => ErrorTip::Suggestion(format!(
                "Pattern `{}` is not a valid regular expression",
                pattern
            )),
            ErrorImpl::InvalidCatalogue { reason } => ErrorTip::Suggestion(format!(
                "The rule catalogue {}, the catch-all rule must be listed exactly once and last",
                reason
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { character } => write!(
                f,
                "Unexpected character {:?} at line {}",
                character, self.position.line
            ),
            other => write!(f, "{}", other),
        }
    }
}

impl std::error::Error for Error {}

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
    #[error("unrecognised character: {character:?}")]
    UnrecognisedCharacter { character: char },
    #[error("invalid pattern {pattern:?}: {message}")]
    InvalidPattern { pattern: String, message: String },
    #[error("invalid rule catalogue: {reason}")]
    InvalidCatalogue { reason: String },
}
