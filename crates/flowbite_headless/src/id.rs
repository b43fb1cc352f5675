//! Item identifiers shared between a widget and its child views.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

const GENERATED_PREFIX: &str = "accordion-item";

static NEXT_GENERATED_ID: AtomicU64 = AtomicU64::new(1);

/// Identifier for one togglable item inside a widget.
///
/// Any string is accepted. Generated ids are unique for the lifetime of the process but are not
/// stable across remounts, so controlled or persisted usage should always supply an explicit id.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Wraps a caller-supplied identifier.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Allocates a fresh `accordion-item-<n>` identifier.
    pub fn generate() -> Self {
        let next = NEXT_GENERATED_ID.fetch_add(1, Ordering::Relaxed);
        Self(format!("{GENERATED_PREFIX}-{next}"))
    }

    /// Uses `explicit` when present, otherwise generates an identifier.
    pub fn or_generate(explicit: Option<String>) -> Self {
        match explicit {
            Some(raw) if !raw.trim().is_empty() => Self(raw),
            _ => Self::generate(),
        }
    }

    /// Returns the string form of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// DOM id of the item's header control.
    pub fn header_id(&self) -> String {
        format!("{}-heading", self.0)
    }

    /// DOM id of the item's collapsible body.
    pub fn body_id(&self) -> String {
        format!("{}-body", self.0)
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ItemId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for ItemId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
