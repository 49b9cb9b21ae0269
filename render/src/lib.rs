//! # coverleaf-render
//!
//! Leptos SSR renderer for multi-variant agency sites.
//!
//! This crate turns a client's [`ClientProfile`] and a set of section
//! content bundles into a complete static HTML page. Variant selection is
//! a registry lookup: each of the three variants (professional, modern,
//! coastal) registers one renderer per section, and a missing pair falls
//! back to the default variant rather than failing the page.
//!
//! ## Quick start
//!
//! ```rust
//! use coverleaf::content::{HeroContent, SectionContent};
//! use coverleaf::{ClientProfile, Page};
//! use coverleaf_render::render_page;
//!
//! let profile = ClientProfile {
//!     agency_name: "Harbor Light Insurance".into(),
//!     city: "Wilmington".into(),
//!     state: "NC".into(),
//!     canonical_url: "https://harborlight.example.com".into(),
//!     variant: "coastal".into(),
//!     ..Default::default()
//! };
//!
//! let sections = [SectionContent::Hero(HeroContent {
//!     heading: "Coverage for life on the water".into(),
//!     ..Default::default()
//! })];
//!
//! let html = render_page(&profile, Page::Home, &sections);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Leptos 0.8 SSR
//!
//! Rendering uses the `RenderHtml` trait - no reactive runtime, no
//! hydration, pure static HTML. Interactivity (accordion, carousel,
//! search) belongs to the CSR app, which shares the same content model
//! through the `coverleaf` crate.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod registry;
pub mod styles;

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use coverleaf::content::{
    CareersContent, ContactContent, FaqListingContent, SectionContent, TestimonialsContent,
};
use coverleaf::{ClientProfile, ContentSource, Page, Variant};

use components::PageDocument;

/// Render one complete page for a client.
///
/// The client's configured variant name is parsed (unknown names fall
/// back to the default variant), each bundle is resolved through the
/// variant registry, and the result is a full HTML document including
/// `<!DOCTYPE html>`.
pub fn render_page(profile: &ClientProfile, page: Page, sections: &[SectionContent]) -> String {
    let variant = Variant::parse(&profile.variant);
    let rendered: Vec<AnyView> = sections
        .iter()
        .map(|bundle| registry::resolve(variant, bundle.section())(bundle))
        .collect();

    let doc = view! {
        <PageDocument
            profile=profile.clone()
            page=page
            variant=variant
            sections=rendered
        />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Fetch the content bundles a page is composed of, in page order.
///
/// Each section fetches independently; an accessor resolving to absence
/// simply drops that section from the result. There is no ordering
/// guarantee between sibling fetches beyond the output order, and no
/// fetch failure can take out a neighbor.
pub async fn collect_sections<S: ContentSource>(
    source: &S,
    client_id: &str,
    page: Page,
) -> Vec<SectionContent> {
    let mut sections = Vec::new();

    match page {
        Page::Home => {
            if let Some(hero) = source.hero(client_id).await {
                sections.push(SectionContent::Hero(hero));
            }
            if let Some(intro) = source.intro(client_id).await {
                sections.push(SectionContent::Intro(intro));
            }
            if let Some(policies) = source.location_policies(client_id).await {
                sections.push(SectionContent::LocationPolicies(policies));
            }
            let testimonials = source.testimonials(client_id).await;
            if !testimonials.is_empty() {
                sections.push(SectionContent::Testimonials(TestimonialsContent {
                    heading: "What our clients say".into(),
                    items: testimonials,
                }));
            }
            if let Some(preview) = source
                .faq_categories(client_id)
                .await
                .into_iter()
                .find(|cat| cat.show_section && !cat.items.is_empty())
            {
                sections.push(SectionContent::FaqPreview(preview));
            }
            if let Some(cta) = source.home_cta(client_id).await {
                sections.push(SectionContent::HomeCta(cta));
            }
        }
        Page::About => {
            if let Some(intro) = source.intro(client_id).await {
                sections.push(SectionContent::Intro(intro));
            }
            let members = source.team(client_id).await;
            if !members.is_empty() {
                sections.push(SectionContent::Team(coverleaf::content::TeamContent {
                    heading: "Meet the team".into(),
                    members,
                }));
            }
            if let Some(cta) = source.home_cta(client_id).await {
                sections.push(SectionContent::HomeCta(cta));
            }
        }
        Page::Contact => {
            let profile = source.client_profile(client_id).await.unwrap_or_default();
            sections.push(SectionContent::ContactPanel(ContactContent {
                heading: "Contact us".into(),
                blurb: "Questions about a policy or a quote? We answer the phone.".into(),
                location: profile.primary_location,
                email: profile.contact_email,
            }));
        }
        Page::Faq => {
            let categories = source.faq_categories(client_id).await;
            if !categories.is_empty() {
                sections.push(SectionContent::FaqListing(FaqListingContent { categories }));
            }
        }
        Page::Blog => {
            let posts = source.blog_posts(client_id).await;
            if !posts.is_empty() {
                sections.push(SectionContent::BlogRoll(coverleaf::content::BlogRollContent {
                    heading: "From the blog".into(),
                    posts,
                }));
            }
        }
        Page::Careers => {
            let openings = source.job_openings(client_id).await;
            if !openings.is_empty() {
                sections.push(SectionContent::Careers(CareersContent {
                    show_section: true,
                    heading: "Open positions".into(),
                    intro: "We're growing. Join an agency that takes care of its own.".into(),
                    openings,
                }));
            }
        }
        Page::Team => {
            let members = source.team(client_id).await;
            if !members.is_empty() {
                sections.push(SectionContent::Team(coverleaf::content::TeamContent {
                    heading: "Our team".into(),
                    members,
                }));
            }
        }
        // Search results depend on a live query; nothing to pre-render.
        Page::Search => {}
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use coverleaf::content::{
        CtaContent, FaqCategory, FaqItem, HeroContent, JobOpening, LocationPoliciesContent,
        PolicyHighlight, Testimonial, UNAVAILABLE_MESSAGE,
    };
    use coverleaf::StaticSource;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    fn profile(variant: &str) -> ClientProfile {
        ClientProfile {
            agency_name: "Sterling & Associates".into(),
            city: "Hartford".into(),
            state: "CT".into(),
            canonical_url: "https://sterling.example.com".into(),
            variant: variant.into(),
            ..Default::default()
        }
    }

    fn faq_items(n: usize) -> Vec<FaqItem> {
        (0..n)
            .map(|i| FaqItem {
                question: format!("Question {i}?"),
                answer: format!("Answer {i}."),
            })
            .collect()
    }

    #[test]
    fn renders_empty_page_shell() {
        let html = render_page(&profile("professional"), Page::Home, &[]);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("Sterling &amp; Associates"));
        assert!(html.contains("https://sterling.example.com/"));
    }

    #[test]
    fn unknown_variant_renders_the_default_theme() {
        let html = render_page(&profile("retro-wave"), Page::Home, &[]);
        assert!(html.contains("<body class=\"theme-professional\""));
    }

    #[test]
    fn each_known_variant_gets_its_own_theme() {
        for (name, marker) in [
            ("professional", "theme-professional"),
            ("modern", "theme-modern"),
            ("coastal", "theme-coastal"),
        ] {
            let html = render_page(&profile(name), Page::Home, &[]);
            assert!(
                html.contains(&format!("<body class=\"{marker}\"")),
                "variant {name} missing body theme class"
            );
        }
    }

    #[test]
    fn long_faq_preview_caps_at_five_with_view_all_link() {
        let sections = [SectionContent::FaqPreview(FaqCategory {
            id: "general".into(),
            tagline: "Common questions".into(),
            items: faq_items(7),
            ..Default::default()
        })];
        let html = render_page(&profile("professional"), Page::Home, &sections);

        assert_eq!(html.matches("class=\"faq-question\"").count(), 5);
        assert!(html.contains("class=\"faq-view-all\""));
        assert!(html.contains("Question 4?"));
        assert!(!html.contains("Question 5?"));
    }

    #[test]
    fn short_faq_preview_renders_everything_without_a_link() {
        let sections = [SectionContent::FaqPreview(FaqCategory {
            id: "general".into(),
            items: faq_items(3),
            ..Default::default()
        })];
        let html = render_page(&profile("modern"), Page::Home, &sections);

        assert_eq!(html.matches("class=\"faq-question\"").count(), 3);
        assert!(!html.contains("class=\"faq-view-all\""));
    }

    #[test]
    fn empty_faq_tagline_falls_back_to_the_default_heading() {
        let sections = [SectionContent::FaqPreview(FaqCategory {
            id: "general".into(),
            items: faq_items(1),
            ..Default::default()
        })];
        let html = render_page(&profile("coastal"), Page::Home, &sections);
        assert!(html.contains("Frequently Asked Questions"));
    }

    #[test]
    fn rating_renders_exactly_four_filled_one_empty() {
        let sections = [SectionContent::Testimonials(TestimonialsContent {
            heading: "Reviews".into(),
            items: vec![Testimonial {
                id: "t1".into(),
                author: "R. Alvarez".into(),
                content: "Fast claims, real people.".into(),
                rating: Some(4),
                ..Default::default()
            }],
        })];
        let html = render_page(&profile("professional"), Page::Home, &sections);

        assert_eq!(html.matches("class=\"star filled\"").count(), 4);
        assert_eq!(html.matches("class=\"star empty\"").count(), 1);
    }

    #[test]
    fn out_of_range_rating_clamps_to_the_scale() {
        let sections = [SectionContent::Testimonials(TestimonialsContent {
            heading: "Reviews".into(),
            items: vec![Testimonial {
                id: "t1".into(),
                author: "B. Okafor".into(),
                content: "Eleven out of ten.".into(),
                rating: Some(11),
                ..Default::default()
            }],
        })];
        let html = render_page(&profile("modern"), Page::Home, &sections);

        assert_eq!(html.matches("class=\"star filled\"").count(), 5);
        assert_eq!(html.matches("class=\"star empty\"").count(), 0);
    }

    #[test]
    fn empty_testimonial_list_renders_nothing() {
        let sections = [SectionContent::Testimonials(TestimonialsContent {
            heading: "Reviews".into(),
            items: vec![],
        })];
        for variant in ["professional", "modern", "coastal"] {
            let html = render_page(&profile(variant), Page::Home, &sections);
            assert!(
                !html.contains("class=\"testimonial-content\""),
                "variant {variant} rendered an empty testimonial section"
            );
        }
    }

    #[test]
    fn hidden_sections_stay_hidden_regardless_of_other_fields() {
        let sections = [
            SectionContent::FaqPreview(FaqCategory {
                id: "hidden".into(),
                tagline: "Hidden questions".into(),
                show_section: false,
                items: faq_items(3),
                ..Default::default()
            }),
            SectionContent::LocationPolicies(LocationPoliciesContent {
                show_section: false,
                heading: "Policies in Hartford".into(),
                policies: vec![PolicyHighlight {
                    name: "Auto".into(),
                    blurb: "Liability and collision.".into(),
                }],
                ..Default::default()
            }),
            SectionContent::Careers(CareersContent {
                show_section: false,
                heading: "Join us".into(),
                openings: vec![JobOpening {
                    id: "j1".into(),
                    title: "Licensed Agent".into(),
                    ..Default::default()
                }],
                ..Default::default()
            }),
        ];
        let html = render_page(&profile("professional"), Page::Home, &sections);

        assert!(!html.contains("Hidden questions"));
        assert!(!html.contains("Policies in Hartford"));
        assert!(!html.contains("Licensed Agent"));
    }

    #[test]
    fn contact_without_primary_location_shows_inline_unavailable() {
        let sections = [SectionContent::ContactPanel(ContactContent {
            heading: "Contact us".into(),
            ..Default::default()
        })];
        let html = render_page(&profile("coastal"), Page::Contact, &sections);

        assert!(html.contains(UNAVAILABLE_MESSAGE));
        assert!(!html.contains("class=\"contact-form\""));
    }

    #[test]
    fn cta_renders_phone_and_button() {
        let sections = [SectionContent::HomeCta(CtaContent {
            heading: "Ready for a quote?".into(),
            body: "Five minutes, no obligation.".into(),
            button_label: "Start a quote".into(),
            button_href: "/contact".into(),
            phone: Some("(860) 555-0144".into()),
        })];
        let html = render_page(&profile("modern"), Page::Home, &sections);

        assert!(html.contains("Start a quote"));
        assert!(html.contains("tel:(860) 555-0144"));
    }

    #[test]
    fn collect_home_sections_pulls_each_block_independently() {
        let source = StaticSource::from_json(
            r#"{
                "sterling": {
                    "profile": {
                        "agency_name": "Sterling & Associates",
                        "city": "Hartford", "state": "CT",
                        "primary_location": null,
                        "canonical_url": "https://sterling.example.com",
                        "variant": "professional"
                    },
                    "hero": {"heading": "Insurance, underwritten by trust"},
                    "testimonials": [
                        {"id": "t1", "author": "M. Chen", "content": "Saved us twice.", "rating": 5}
                    ],
                    "faq": [
                        {"id": "claims", "tagline": "Claims", "items": [
                            {"question": "How fast are claims paid?", "answer": "Most within a week."}
                        ]}
                    ]
                }
            }"#,
        );

        let sections = block_on(collect_sections(&source, "sterling", Page::Home));
        let tags: Vec<_> = sections.iter().map(|s| s.section()).collect();
        assert_eq!(
            tags,
            vec![
                coverleaf::Section::Hero,
                coverleaf::Section::Testimonials,
                coverleaf::Section::FaqPreview,
            ]
        );

        // Missing intro/policies/cta degraded to absence without blocking
        // the sections that did resolve.
        let html = render_page(
            &block_on(source.client_profile("sterling")).unwrap(),
            Page::Home,
            &sections,
        );
        assert!(html.contains("Insurance, underwritten by trust"));
        assert!(html.contains("How fast are claims paid?"));
    }

    #[test]
    fn bundle_straight_off_the_wire_renders() {
        // The content source delivers bundles as JSON; the renderer takes
        // them as-is.
        let bundle: SectionContent = serde_json::from_str(
            r#"{"FaqPreview": {
                "id": "claims",
                "tagline": "Claims questions",
                "items": [
                    {"question": "Who do I call first?", "answer": "Us, not the carrier."}
                ]
            }}"#,
        )
        .unwrap();

        let html = render_page(&profile("coastal"), Page::Home, &[bundle]);
        assert!(html.contains("Claims questions"));
        assert!(html.contains("Who do I call first?"));
    }

    #[test]
    fn collect_contact_sections_always_produces_the_panel() {
        let source = StaticSource::from_json("{}");
        let sections = block_on(collect_sections(&source, "missing", Page::Contact));
        assert_eq!(sections.len(), 1);

        let html = render_page(&profile("professional"), Page::Contact, &sections);
        assert!(html.contains(UNAVAILABLE_MESSAGE));
    }
}
