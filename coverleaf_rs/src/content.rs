//! Content data model for client sites.
//!
//! These types define what sections consume. They're designed to be:
//!
//! - **Serializable** - the content source delivers them as plain JSON
//! - **Clone-friendly** - components can share data without borrowing issues
//! - **Default-able** - build partial bundles with `..Default::default()`
//!
//! Everything here is transient: reconstructed per request from the content
//! source, never persisted or mutated by this codebase.
//!
//! # Example
//!
//! ```rust
//! use coverleaf::content::{FaqCategory, FaqItem};
//!
//! let coverage = FaqCategory {
//!     id: "coverage".into(),
//!     tagline: "Coverage questions".into(),
//!     items: vec![FaqItem {
//!         question: "Does homeowners insurance cover flood damage?".into(),
//!         answer: "Standard policies do not; flood coverage is separate.".into(),
//!     }],
//!     ..Default::default()
//! };
//! ```

use serde::{Deserialize, Serialize};

use crate::error::SectionError;
use crate::variant::Section;

/// Maximum FAQ items a preview section renders inline. Longer lists get a
/// "view all" link to the full FAQ page instead of overflowing.
pub const FAQ_PREVIEW_LIMIT: usize = 5;

/// Fallback heading when a FAQ bundle arrives without a tagline.
pub const DEFAULT_FAQ_TAGLINE: &str = "Frequently Asked Questions";

/// Inline message shown when a section's required dependency is absent,
/// e.g. a contact panel for a client with no primary location.
pub const UNAVAILABLE_MESSAGE: &str =
    "This section is currently unavailable. Please check back soon.";

/// Per-client profile: who the site is for.
///
/// Supplied by the external configuration lookup, read-only for the
/// lifetime of a request. The `variant` field is the raw configured name;
/// parse it with [`crate::Variant::parse`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ClientProfile {
    /// Agency display name, e.g. "Harbor Light Insurance".
    pub agency_name: String,
    pub city: String,
    pub state: String,
    /// Primary office, if the client has one. Contact features require it.
    pub primary_location: Option<Location>,
    /// Canonical site URL, used in `<link rel="canonical">`.
    pub canonical_url: String,
    #[serde(default)]
    pub contact_email: Option<String>,
    /// Configured variant name (opaque string; unknown values fall back).
    #[serde(default)]
    pub variant: String,
}

impl ClientProfile {
    /// The primary office, or [`SectionError::Unavailable`] when the client
    /// has none. Callers surface this as an inline message, never a crash.
    pub fn primary_location(&self) -> Result<&Location, SectionError> {
        self.primary_location.as_ref().ok_or(SectionError::Unavailable)
    }
}

/// A physical office location.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    /// Display label, e.g. "Downtown Wilmington".
    pub label: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// One question/answer pair. Order within a category is the source order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

/// A grouped FAQ bundle: the content contract of the FAQ preview section
/// and one block of the full FAQ listing.
///
/// `show_section: false` suppresses the block entirely regardless of the
/// other fields, as does an empty item list.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FaqCategory {
    pub id: String,
    /// Short heading; empty falls back to [`DEFAULT_FAQ_TAGLINE`].
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub description: String,
    /// Explicit opt-out flag; sources omit it to mean "show".
    #[serde(default = "show_by_default")]
    pub show_section: bool,
    /// Ordered question list; source order is preserved.
    #[serde(default)]
    pub items: Vec<FaqItem>,
}

impl Default for FaqCategory {
    fn default() -> FaqCategory {
        FaqCategory {
            id: String::new(),
            tagline: String::new(),
            subtitle: String::new(),
            description: String::new(),
            show_section: true,
            items: Vec::new(),
        }
    }
}

fn show_by_default() -> bool {
    true
}

/// A client testimonial.
///
/// `rating` is whatever the source supplied; rendering clamps the display
/// to 0-5 stars but the model does not validate.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub author: String,
    #[serde(default)]
    pub title: Option<String>,
    pub content: String,
    #[serde(default)]
    pub rating: Option<i64>,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl Testimonial {
    /// Star count for display, clamped to `[0, 5]`. `None` means the
    /// testimonial renders without a rating row.
    pub fn stars(&self) -> Option<u8> {
        self.rating.map(|r| r.clamp(0, 5) as u8)
    }
}

/// An agency staff member for the team grid.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub photo: Option<String>,
}

/// An open position on the careers page.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct JobOpening {
    pub id: String,
    pub title: String,
    /// Office label this opening belongs to.
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub apply_url: Option<String>,
}

/// Blog post metadata for the blog roll. Bodies live with the content
/// source; this codebase only renders listings.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BlogPost {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    /// Publication date, already formatted for display.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub tag: Option<String>,
}

/// Hero banner content.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct HeroContent {
    pub heading: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub cta_label: String,
    #[serde(default)]
    pub cta_href: String,
}

/// Agency introduction blurb.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct IntroContent {
    pub heading: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
}

/// One policy line highlighted on the homepage.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PolicyHighlight {
    pub name: String,
    #[serde(default)]
    pub blurb: String,
}

/// Location-and-policies section content. `show_section: false` suppresses
/// the section entirely regardless of the other fields.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LocationPoliciesContent {
    #[serde(default)]
    pub show_section: bool,
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub policies: Vec<PolicyHighlight>,
}

/// Testimonials section content.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TestimonialsContent {
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub items: Vec<Testimonial>,
}

/// Call-to-action band content.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CtaContent {
    pub heading: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub button_label: String,
    #[serde(default)]
    pub button_href: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Careers section content. Suppressed when `show_section` is false or the
/// opening list is empty - no empty shells.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CareersContent {
    #[serde(default)]
    pub show_section: bool,
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub intro: String,
    #[serde(default)]
    pub openings: Vec<JobOpening>,
}

/// Team section content.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TeamContent {
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub members: Vec<TeamMember>,
}

/// Blog roll content.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BlogRollContent {
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub posts: Vec<BlogPost>,
}

/// Full FAQ listing content: every category, uncapped.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FaqListingContent {
    #[serde(default)]
    pub categories: Vec<FaqCategory>,
}

/// Contact panel content. The location is the client's primary office;
/// absence makes the panel render the documented unavailable message.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ContactContent {
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub blurb: String,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub email: Option<String>,
}

/// The content bundle handed to a resolved section renderer.
///
/// Content shape is identical across variants for a given section; only
/// styling differs. A renderer handed the wrong bundle variant renders
/// nothing (the missing-content degradation), never panics.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum SectionContent {
    Hero(HeroContent),
    Intro(IntroContent),
    LocationPolicies(LocationPoliciesContent),
    Testimonials(TestimonialsContent),
    HomeCta(CtaContent),
    FaqPreview(FaqCategory),
    FaqListing(FaqListingContent),
    Careers(CareersContent),
    Team(TeamContent),
    BlogRoll(BlogRollContent),
    ContactPanel(ContactContent),
}

impl SectionContent {
    /// The section tag this bundle belongs to.
    pub fn section(&self) -> Section {
        match self {
            SectionContent::Hero(_) => Section::Hero,
            SectionContent::Intro(_) => Section::Intro,
            SectionContent::LocationPolicies(_) => Section::LocationPolicies,
            SectionContent::Testimonials(_) => Section::Testimonials,
            SectionContent::HomeCta(_) => Section::HomeCta,
            SectionContent::FaqPreview(_) => Section::FaqPreview,
            SectionContent::FaqListing(_) => Section::FaqListing,
            SectionContent::Careers(_) => Section::Careers,
            SectionContent::Team(_) => Section::Team,
            SectionContent::BlogRoll(_) => Section::BlogRoll,
            SectionContent::ContactPanel(_) => Section::ContactPanel,
        }
    }

    pub fn hero(&self) -> Option<&HeroContent> {
        match self {
            SectionContent::Hero(c) => Some(c),
            _ => None,
        }
    }

    pub fn intro(&self) -> Option<&IntroContent> {
        match self {
            SectionContent::Intro(c) => Some(c),
            _ => None,
        }
    }

    pub fn location_policies(&self) -> Option<&LocationPoliciesContent> {
        match self {
            SectionContent::LocationPolicies(c) => Some(c),
            _ => None,
        }
    }

    pub fn testimonials(&self) -> Option<&TestimonialsContent> {
        match self {
            SectionContent::Testimonials(c) => Some(c),
            _ => None,
        }
    }

    pub fn home_cta(&self) -> Option<&CtaContent> {
        match self {
            SectionContent::HomeCta(c) => Some(c),
            _ => None,
        }
    }

    pub fn faq_preview(&self) -> Option<&FaqCategory> {
        match self {
            SectionContent::FaqPreview(c) => Some(c),
            _ => None,
        }
    }

    pub fn faq_listing(&self) -> Option<&FaqListingContent> {
        match self {
            SectionContent::FaqListing(c) => Some(c),
            _ => None,
        }
    }

    pub fn careers(&self) -> Option<&CareersContent> {
        match self {
            SectionContent::Careers(c) => Some(c),
            _ => None,
        }
    }

    pub fn team(&self) -> Option<&TeamContent> {
        match self {
            SectionContent::Team(c) => Some(c),
            _ => None,
        }
    }

    pub fn blog_roll(&self) -> Option<&BlogRollContent> {
        match self {
            SectionContent::BlogRoll(c) => Some(c),
            _ => None,
        }
    }

    pub fn contact_panel(&self) -> Option<&ContactContent> {
        match self {
            SectionContent::ContactPanel(c) => Some(c),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_clamp_out_of_range_ratings() {
        let mut t = Testimonial {
            rating: Some(4),
            ..Default::default()
        };
        assert_eq!(t.stars(), Some(4));

        t.rating = Some(9);
        assert_eq!(t.stars(), Some(5));

        t.rating = Some(-3);
        assert_eq!(t.stars(), Some(0));

        t.rating = None;
        assert_eq!(t.stars(), None);
    }

    #[test]
    fn primary_location_absent_is_unavailable() {
        let profile = ClientProfile::default();
        assert!(matches!(
            profile.primary_location(),
            Err(SectionError::Unavailable)
        ));
    }

    #[test]
    fn bundle_accessors_reject_other_sections() {
        let bundle = SectionContent::Hero(HeroContent::default());
        assert_eq!(bundle.section(), Section::Hero);
        assert!(bundle.hero().is_some());
        assert!(bundle.faq_preview().is_none());
        assert!(bundle.testimonials().is_none());
    }

    #[test]
    fn faq_category_deserializes_with_missing_fields() {
        let cat: FaqCategory = serde_json::from_str(
            r#"{"id":"claims","items":[{"question":"How do I file?","answer":"Call us."}]}"#,
        )
        .unwrap();
        assert_eq!(cat.items.len(), 1);
        assert!(cat.tagline.is_empty());
        // Sources that never mention the flag mean "show".
        assert!(cat.show_section);
    }
}
