//! Section-level degradation taxonomy.
//!
//! Nothing in this system is fatal to a whole page: each section recovers
//! locally and its neighbors render regardless. These variants name the
//! three conditions so recovery sites stay distinguishable - a registry
//! miss and an empty fetch are different situations with different
//! policies, and conflating them hides bugs.

use thiserror::Error;

use crate::variant::{Section, Variant};

/// A recoverable condition scoped to one section of one page.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SectionError {
    /// The content source returned empty/null. Recovery: suppress the
    /// section or substitute the documented default string.
    #[error("no content available for this section")]
    MissingContent,

    /// The registry has no renderer for this (variant, section) pair.
    /// Recovery: fall back to the default variant's renderer.
    #[error("no {section:?} implementation for variant {variant:?}")]
    MissingImplementation { variant: Variant, section: Section },

    /// A required dependency (e.g. the client's primary location) is
    /// absent. Recovery: render a user-visible inline message.
    #[error("required dependency is currently unavailable")]
    Unavailable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_implementation_names_the_pair() {
        let err = SectionError::MissingImplementation {
            variant: Variant::Coastal,
            section: Section::Team,
        };
        let msg = err.to_string();
        assert!(msg.contains("Team"));
        assert!(msg.contains("Coastal"));
    }
}
