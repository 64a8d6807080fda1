//! Variant lifecycle states.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a catalog variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VariantStatus {
    /// Being prepared by the seller, not yet visible in the catalog.
    #[default]
    Draft,

    /// Visible in the catalog.
    Published,

    /// Soft-deleted. Terminal: no command may touch the variant again.
    Deleted,
}

impl VariantStatus {
    /// True once the variant has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        matches!(self, VariantStatus::Deleted)
    }

    /// True while the variant is visible in the catalog.
    pub fn is_published(&self) -> bool {
        matches!(self, VariantStatus::Published)
    }

    /// Returns the status as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            VariantStatus::Draft => "Draft",
            VariantStatus::Published => "Published",
            VariantStatus::Deleted => "Deleted",
        }
    }
}

impl fmt::Display for VariantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
