//! Ownership-query hints — the legacy permissive class mapping.
//!
//! Some callers query ownership without naming a class: an absent
//! argument has always read as the primary selection, and a sentinel
//! "true" value as the secondary. That convenience is a caller-side
//! mapping layered over the strict enum API; it lives here so the core
//! contract stays exact.

use super::SelectionBroker;
use crate::native::NativeClipboard;
use crate::selection::SelectionClass;

/// How a caller referred to a class in an ownership query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnershipHint {
    /// No class given; reads as the primary selection.
    Default,
    /// The legacy sentinel; reads as the secondary selection.
    Sentinel,
    /// An explicit class.
    Class(SelectionClass),
    /// A class referred to by name. Unknown names resolve to nothing.
    Named(String),
}

impl OwnershipHint {
    /// The class this hint refers to, if any.
    pub fn resolve(&self) -> Option<SelectionClass> {
        match self {
            Self::Default => Some(SelectionClass::Primary),
            Self::Sentinel => Some(SelectionClass::Secondary),
            Self::Class(class) => Some(*class),
            Self::Named(name) => name.parse().ok(),
        }
    }
}

impl<N: NativeClipboard> SelectionBroker<N> {
    /// Permissive ownership query.
    ///
    /// Hints that resolve to no known class report not-owned rather
    /// than failing; everything else delegates to
    /// [`owns`](SelectionBroker::owns).
    pub fn owns_hint(&self, hint: &OwnershipHint) -> bool {
        match hint.resolve() {
            Some(class) => self.owns(class),
            None => false,
        }
    }
}
