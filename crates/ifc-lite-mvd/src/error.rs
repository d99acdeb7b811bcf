// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for requirement evaluation

use ifc_lite_model::ParseError;
use serde::Serialize;
use thiserror::Error;

/// Result type alias for requirement checks
pub type Result<T> = std::result::Result<T, CheckError>;

/// Broad failure classes reported alongside each failed requirement
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorCategory {
    /// No model is available; nothing after this can be evaluated
    Setup,
    /// A referenced element does not exist
    NotFound,
    /// An expected attribute, property, quantity or context is missing
    AbsentValue,
    /// A value is present but differs from the expectation
    Mismatch,
    /// The requirement text itself cannot be interpreted
    AmbiguousInput,
}

/// Reasons a requirement fails
#[derive(Error, Debug)]
pub enum CheckError {
    /// No model has been loaded yet
    #[error("No file was loaded, so this requirement cannot be checked")]
    NotLoaded,

    /// The model file could not be read or parsed
    #[error("The file {locator} could not be loaded: {source}")]
    Load {
        /// Locator as written in the requirement
        locator: String,
        /// Underlying parser error
        #[source]
        source: ParseError,
    },

    /// Element lookup failed
    #[error("The element with {0} could not be found.")]
    NotFound(String),

    /// Expected value is missing
    #[error("{0}")]
    Absent(String),

    /// Value differs from the expectation
    #[error("{0}")]
    Mismatch(String),

    /// Bookmark read before any requirement recorded it
    #[error("No \"{0}\" bookmark has been recorded for the loaded model")]
    BookmarkMissing(String),

    /// No binding matches the requirement sentence
    #[error("No requirement definition matches \"{0}\"")]
    Undefined(String),

    /// Pattern in a requirement or binding does not compile
    #[error("Invalid pattern \"{pattern}\": {reason}")]
    InvalidPattern {
        /// Offending pattern text
        pattern: String,
        /// Compiler message
        reason: String,
    },

    /// Reference list could not be read
    #[error("The list in \"{locator}\" could not be read: {reason}")]
    ReferenceList {
        /// Locator as written in the requirement
        locator: String,
        /// I/O or CSV error message
        reason: String,
    },
}

impl CheckError {
    /// Create a new absent-value error
    pub fn absent(msg: impl Into<String>) -> Self {
        CheckError::Absent(msg.into())
    }

    /// Create a new mismatch error
    pub fn mismatch(msg: impl Into<String>) -> Self {
        CheckError::Mismatch(msg.into())
    }

    /// Create a new invalid-pattern error
    pub fn invalid_pattern(pattern: &str, reason: impl ToString) -> Self {
        CheckError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Failure class of this error
    pub fn category(&self) -> ErrorCategory {
        match self {
            CheckError::NotLoaded | CheckError::Load { .. } => ErrorCategory::Setup,
            CheckError::NotFound(_) => ErrorCategory::NotFound,
            CheckError::Absent(_)
            | CheckError::BookmarkMissing(_)
            | CheckError::ReferenceList { .. } => ErrorCategory::AbsentValue,
            CheckError::Mismatch(_) => ErrorCategory::Mismatch,
            CheckError::Undefined(_) | CheckError::InvalidPattern { .. } => {
                ErrorCategory::AmbiguousInput
            }
        }
    }

    /// Whether later requirements can still be evaluated after this error
    pub fn is_fatal(&self) -> bool {
        self.category() == ErrorCategory::Setup
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        assert!(CheckError::NotLoaded.is_fatal());
        let load = CheckError::Load {
            locator: "missing.ifc".into(),
            source: ParseError::format("empty"),
        };
        assert!(load.is_fatal());
        assert!(load.to_string().contains("missing.ifc"));
        assert_eq!(CheckError::NotFound("#3".into()).category(), ErrorCategory::NotFound);
        assert_eq!(
            CheckError::BookmarkMissing("geolocation".into()).category(),
            ErrorCategory::AbsentValue
        );
        assert_eq!(
            CheckError::Undefined("nonsense".into()).category(),
            ErrorCategory::AmbiguousInput
        );
        assert!(!CheckError::mismatch("x").is_fatal());
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            CheckError::NotFound("#42".into()).to_string(),
            "The element with #42 could not be found."
        );
        assert_eq!(CheckError::absent("nothing here").to_string(), "nothing here");
    }
}
