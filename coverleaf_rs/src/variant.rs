//! Variant, section, and page tags.
//!
//! A *variant* is a named visual template family applied uniformly across a
//! client's site. A *section* is a named content block present in every
//! variant with a shared content contract. Pages compose sections; the
//! renderer looks implementations up by `(Variant, Section)`.

use serde::{Deserialize, Serialize};

/// Visual template family for a client site.
///
/// The variant name arrives from per-client configuration as an opaque
/// string; [`Variant::parse`] turns it into a tag and never fails -
/// unrecognized names fall back to the default ([`Variant::Professional`]).
/// Resolved once per page render and immutable afterwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Conservative, trust-forward styling. The fallback for unknown names.
    #[default]
    Professional,
    /// Bold type, card grids, high contrast.
    Modern,
    /// Airy palette and soft shapes for waterfront agencies.
    Coastal,
}

impl Variant {
    /// Every variant, for registry-completeness checks.
    pub const ALL: [Variant; 3] = [Variant::Professional, Variant::Modern, Variant::Coastal];

    /// Parse a configured variant name. Unknown names yield the default
    /// variant rather than an error; a typo in client configuration must
    /// never take a site down.
    pub fn parse(name: &str) -> Variant {
        match name.trim().to_ascii_lowercase().as_str() {
            "professional" => Variant::Professional,
            "modern" => Variant::Modern,
            "coastal" => Variant::Coastal,
            _ => Variant::default(),
        }
    }

    /// Stable lowercase tag, used in CSS class names and config files.
    pub fn slug(&self) -> &'static str {
        match self {
            Variant::Professional => "professional",
            Variant::Modern => "modern",
            Variant::Coastal => "coastal",
        }
    }
}

/// Named content block. Lookup key into the variant registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    Intro,
    LocationPolicies,
    Testimonials,
    HomeCta,
    FaqPreview,
    FaqListing,
    Careers,
    Team,
    BlogRoll,
    ContactPanel,
}

impl Section {
    /// Every section, for registry-completeness checks.
    pub const ALL: [Section; 11] = [
        Section::Hero,
        Section::Intro,
        Section::LocationPolicies,
        Section::Testimonials,
        Section::HomeCta,
        Section::FaqPreview,
        Section::FaqListing,
        Section::Careers,
        Section::Team,
        Section::BlogRoll,
        Section::ContactPanel,
    ];
}

/// Page types a client site serves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Contact,
    Faq,
    Blog,
    Careers,
    Team,
    Search,
}

impl Page {
    /// Route path for this page.
    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::About => "/about",
            Page::Contact => "/contact",
            Page::Faq => "/faq",
            Page::Blog => "/blog",
            Page::Careers => "/careers",
            Page::Team => "/team",
            Page::Search => "/search",
        }
    }

    /// Human-facing label, used in navigation and `<title>`.
    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Contact => "Contact",
            Page::Faq => "FAQ",
            Page::Blog => "Blog",
            Page::Careers => "Careers",
            Page::Team => "Our Team",
            Page::Search => "Search",
        }
    }

    /// Pages that appear in the main navigation, in order. Search is
    /// reached through the search bar, not a nav link.
    pub const NAV: [Page; 7] = [
        Page::Home,
        Page::About,
        Page::Faq,
        Page::Blog,
        Page::Careers,
        Page::Team,
        Page::Contact,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_variant_names_parse() {
        assert_eq!(Variant::parse("professional"), Variant::Professional);
        assert_eq!(Variant::parse("modern"), Variant::Modern);
        assert_eq!(Variant::parse("coastal"), Variant::Coastal);
    }

    #[test]
    fn parse_is_case_and_whitespace_tolerant() {
        assert_eq!(Variant::parse("  Coastal "), Variant::Coastal);
        assert_eq!(Variant::parse("MODERN"), Variant::Modern);
    }

    #[test]
    fn unknown_variant_names_fall_back_to_default() {
        for name in ["retro", "", "professional-v2", "42"] {
            assert_eq!(Variant::parse(name), Variant::Professional);
        }
    }

    #[test]
    fn page_paths_are_distinct() {
        let mut paths: Vec<_> = Page::NAV.iter().map(|p| p.path()).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), Page::NAV.len());
    }
}
