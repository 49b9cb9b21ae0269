//! Leptos UI components for rendering client pages.
//!
//! # Component hierarchy
//!
//! ```text
//! PageDocument
//! ├── SiteHeader
//! ├── main
//! │   └── one renderer per section, resolved through the registry:
//! │       professional::* | modern::* | coastal::*
//! │       (each wrapping shared pieces: StarRating, FaqEntries)
//! └── SiteFooter
//! ```
//!
//! The per-variant modules are deliberately private: callers go through
//! [`crate::registry::resolve`] so the fallback rule is always applied.

pub(crate) mod coastal;
mod document;
pub(crate) mod modern;
pub(crate) mod professional;
mod shared;

pub use document::PageDocument;
pub use shared::{FaqEntries, StarRating};
