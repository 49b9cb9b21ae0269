//! # coverleaf
//!
//! Core library for rendering multi-variant insurance-agency marketing
//! sites. One codebase serves many client agencies; each client picks a
//! visual variant (professional, modern, coastal) and supplies its own
//! content (FAQs, testimonials, team, openings). This crate holds the parts
//! shared by every renderer:
//!
//! - [`content`] - the plain data structures sections consume
//! - [`variant`] - variant/section/page tags and the never-failing variant parse
//! - [`source`] - the content-source contract and a JSON-backed implementation
//! - [`state`] - pure interaction state (accordion, carousel)
//! - [`search`] - query-string construction and FAQ filtering
//! - [`error`] - the section-level degradation taxonomy
//!
//! Nothing here touches a DOM or a network. Rendering lives in
//! `coverleaf-render` (SSR) and `coverleaf-site` (CSR); both consume this
//! crate so their behavior stays in lockstep.
//!
//! ## Degradation model
//!
//! No condition in this system is fatal to a page. Content that fails to
//! load resolves to absence ([`source::ContentSource`] accessors return
//! `Option`/empty), and every section treats absence as "render nothing" or
//! a documented fallback string. See [`error::SectionError`] for the three
//! recovered conditions.

pub mod content;
pub mod error;
pub mod search;
pub mod source;
pub mod state;
pub mod variant;

pub use content::{ClientProfile, FaqCategory, FaqItem, Location, SectionContent, Testimonial};
pub use error::SectionError;
pub use source::{ContentSource, StaticSource};
pub use variant::{Page, Section, Variant};
