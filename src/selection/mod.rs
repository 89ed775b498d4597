//! Selection domain types — classes, targets, payloads, errors.
//!
//! A selection class names one of the window system's independent
//! clipboard stores; a target names a data format offered under a
//! class. Both cross the process boundary as strings, and parsing is
//! where unrecognized class names are rejected — a valid class with no
//! data is a normal empty result, never an error.

mod payload;

pub use payload::{Provenance, SelectionPayload};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::native::NativeError;

/// One of the window system's independent clipboard stores.
///
/// Exactly one native store backs each class. There is no ordering or
/// hierarchy between classes, and operations on different classes do
/// not interfere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SelectionClass {
    /// The primary (mouse) selection.
    Primary,
    /// The secondary selection.
    Secondary,
    /// The general clipboard.
    Clipboard,
}

impl SelectionClass {
    /// All classes, in declaration order.
    pub const ALL: [SelectionClass; 3] = [Self::Primary, Self::Secondary, Self::Clipboard];

    /// The traditional uppercase name of the class.
    pub fn name(self) -> &'static str {
        match self {
            Self::Primary => "PRIMARY",
            Self::Secondary => "SECONDARY",
            Self::Clipboard => "CLIPBOARD",
        }
    }
}

impl fmt::Display for SelectionClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SelectionClass {
    type Err = SelectionError;

    /// Parse a traditional uppercase class name. Matching is
    /// case-sensitive; anything else is rejected.
    fn from_str(s: &str) -> Result<Self, SelectionError> {
        match s {
            "PRIMARY" => Ok(Self::Primary),
            "SECONDARY" => Ok(Self::Secondary),
            "CLIPBOARD" => Ok(Self::Clipboard),
            other => Err(SelectionError::InvalidClass(other.to_owned())),
        }
    }
}

/// A data format offered under a selection class, named by a
/// MIME-type-like identifier such as `text/plain`.
///
/// The identifier is opaque to the broker and must be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TargetType(String);

impl TargetType {
    /// Create a target from a non-empty identifier.
    pub fn new(name: impl Into<String>) -> Result<Self, SelectionError> {
        let name = name.into();
        if name.is_empty() {
            return Err(SelectionError::EmptyTarget);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TargetType {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, SelectionError> {
        Self::new(s)
    }
}

impl TryFrom<String> for TargetType {
    type Error = SelectionError;

    fn try_from(name: String) -> Result<Self, SelectionError> {
        Self::new(name)
    }
}

impl From<TargetType> for String {
    fn from(target: TargetType) -> String {
        target.0
    }
}

impl AsRef<str> for TargetType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Errors returned by broker operations.
///
/// A valid class/target combination with no current data is not an
/// error; fetch reports it as an explicit absent result.
#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    /// The caller named a selection class the broker does not know.
    #[error("invalid selection class: {0:?}")]
    InvalidClass(String),

    /// Target identifiers must be non-empty.
    #[error("empty selection target name")]
    EmptyTarget,

    /// The native clipboard service failed. Opaque; never retried here.
    #[error(transparent)]
    Native(#[from] NativeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Class names --

    #[test]
    fn class_parses_canonical_names() {
        assert_eq!("PRIMARY".parse::<SelectionClass>().unwrap(), SelectionClass::Primary);
        assert_eq!(
            "SECONDARY".parse::<SelectionClass>().unwrap(),
            SelectionClass::Secondary
        );
        assert_eq!(
            "CLIPBOARD".parse::<SelectionClass>().unwrap(),
            SelectionClass::Clipboard
        );
    }

    #[test]
    fn class_rejects_unknown_names() {
        let err = "JUNK".parse::<SelectionClass>().unwrap_err();
        assert!(matches!(err, SelectionError::InvalidClass(name) if name == "JUNK"));
    }

    #[test]
    fn class_parsing_is_case_sensitive() {
        assert!("primary".parse::<SelectionClass>().is_err());
        assert!("Clipboard".parse::<SelectionClass>().is_err());
    }

    #[test]
    fn class_display_round_trips() {
        for class in SelectionClass::ALL {
            assert_eq!(class.to_string().parse::<SelectionClass>().unwrap(), class);
        }
    }

    #[test]
    fn class_serializes_as_uppercase_name() {
        let encoded = rmp_serde::to_vec(&SelectionClass::Secondary).unwrap();
        let name: String = rmp_serde::from_slice(&encoded).unwrap();
        assert_eq!(name, "SECONDARY");
    }

    // -- Targets --

    #[test]
    fn target_accepts_mime_names() {
        let target = TargetType::new("text/plain").unwrap();
        assert_eq!(target.as_str(), "text/plain");
        assert_eq!(target.to_string(), "text/plain");
    }

    #[test]
    fn target_rejects_empty_name() {
        assert!(matches!(
            TargetType::new(""),
            Err(SelectionError::EmptyTarget)
        ));
    }

    #[test]
    fn target_rejects_empty_name_via_serde() {
        let encoded = rmp_serde::to_vec(&String::new()).unwrap();
        let decoded: Result<TargetType, _> = rmp_serde::from_slice(&encoded);
        assert!(decoded.is_err());
    }

    #[test]
    fn target_serde_round_trip() {
        let target = TargetType::new("application/octet-stream").unwrap();
        let encoded = rmp_serde::to_vec(&target).unwrap();
        let decoded: TargetType = rmp_serde::from_slice(&encoded).unwrap();
        assert_eq!(decoded, target);
    }
}
