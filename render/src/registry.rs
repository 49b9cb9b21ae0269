//! The variant registry: a capability-indexed table from
//! `(Variant, Section)` to a concrete renderer.
//!
//! Every section implementation lives behind the same capability -
//! "render this section's content bundle to markup" - so variant
//! selection is a single lookup instead of a conditional scattered
//! through every section. The table carries an explicit fallback rule:
//! a missing pair resolves to the default variant's renderer for that
//! section ([`SectionError::MissingImplementation`] recovered in place),
//! never a failed page.
//!
//! Resolution is pure: no side effects, no allocation beyond the lazily
//! built table.

use std::collections::HashMap;

use leptos::prelude::AnyView;
use once_cell::sync::Lazy;

use coverleaf::{Section, SectionContent, SectionError, Variant};

use crate::components::{coastal, modern, professional};

/// A renderer bound to one (variant, section) pair. Accepts the section's
/// content bundle; handed a bundle for a different section it renders
/// nothing rather than panicking.
pub type SectionRenderer = fn(&SectionContent) -> AnyView;

type RendererTable = HashMap<(Variant, Section), SectionRenderer>;

static REGISTRY: Lazy<RendererTable> = Lazy::new(|| {
    use Section::*;
    use Variant::*;

    let entries: [(Variant, Section, SectionRenderer); 33] = [
        (Professional, Hero, professional::hero),
        (Professional, Intro, professional::intro),
        (Professional, LocationPolicies, professional::location_policies),
        (Professional, Testimonials, professional::testimonials),
        (Professional, HomeCta, professional::home_cta),
        (Professional, FaqPreview, professional::faq_preview),
        (Professional, FaqListing, professional::faq_listing),
        (Professional, Careers, professional::careers),
        (Professional, Team, professional::team),
        (Professional, BlogRoll, professional::blog_roll),
        (Professional, ContactPanel, professional::contact_panel),
        (Modern, Hero, modern::hero),
        (Modern, Intro, modern::intro),
        (Modern, LocationPolicies, modern::location_policies),
        (Modern, Testimonials, modern::testimonials),
        (Modern, HomeCta, modern::home_cta),
        (Modern, FaqPreview, modern::faq_preview),
        (Modern, FaqListing, modern::faq_listing),
        (Modern, Careers, modern::careers),
        (Modern, Team, modern::team),
        (Modern, BlogRoll, modern::blog_roll),
        (Modern, ContactPanel, modern::contact_panel),
        (Coastal, Hero, coastal::hero),
        (Coastal, Intro, coastal::intro),
        (Coastal, LocationPolicies, coastal::location_policies),
        (Coastal, Testimonials, coastal::testimonials),
        (Coastal, HomeCta, coastal::home_cta),
        (Coastal, FaqPreview, coastal::faq_preview),
        (Coastal, FaqListing, coastal::faq_listing),
        (Coastal, Careers, coastal::careers),
        (Coastal, Team, coastal::team),
        (Coastal, BlogRoll, coastal::blog_roll),
        (Coastal, ContactPanel, coastal::contact_panel),
    ];

    let mut table = RendererTable::with_capacity(entries.len());
    for (variant, section, renderer) in entries {
        table.insert((variant, section), renderer);
    }
    table
});

/// Strict lookup: the renderer registered for exactly this pair, or
/// [`SectionError::MissingImplementation`].
pub fn lookup(variant: Variant, section: Section) -> Result<SectionRenderer, SectionError> {
    lookup_in(&REGISTRY, variant, section)
}

/// Resolve with the fallback policy applied: a missing pair falls back to
/// the default variant's renderer for the same section. Never panics; a
/// section absent from the default variant too resolves to an
/// empty-rendering stub.
pub fn resolve(variant: Variant, section: Section) -> SectionRenderer {
    resolve_in(&REGISTRY, variant, section)
}

fn lookup_in(
    table: &RendererTable,
    variant: Variant,
    section: Section,
) -> Result<SectionRenderer, SectionError> {
    table
        .get(&(variant, section))
        .copied()
        .ok_or(SectionError::MissingImplementation { variant, section })
}

fn resolve_in(table: &RendererTable, variant: Variant, section: Section) -> SectionRenderer {
    lookup_in(table, variant, section)
        .or_else(|_| lookup_in(table, Variant::default(), section))
        .unwrap_or(render_nothing)
}

fn render_nothing(_: &SectionContent) -> AnyView {
    use leptos::prelude::*;
    view! {}.into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use coverleaf::content::HeroContent;
    use leptos::tachys::view::RenderHtml;

    fn hero_bundle() -> SectionContent {
        SectionContent::Hero(HeroContent {
            heading: "Coverage built around you".into(),
            ..Default::default()
        })
    }

    #[test]
    fn every_variant_section_pair_is_registered() {
        for variant in Variant::ALL {
            for section in Section::ALL {
                assert!(
                    lookup(variant, section).is_ok(),
                    "missing renderer for {variant:?}/{section:?}"
                );
            }
        }
    }

    #[test]
    fn resolve_never_panics_for_any_pair() {
        let bundle = hero_bundle();
        for variant in Variant::ALL {
            for section in Section::ALL {
                let _ = resolve(variant, section)(&bundle);
            }
        }
    }

    #[test]
    fn missing_pair_falls_back_to_default_variant() {
        // A sparse table simulates an incompletely rolled-out variant.
        let mut table = RendererTable::new();
        table.insert(
            (Variant::Professional, Section::Hero),
            professional::hero as SectionRenderer,
        );

        let bundle = hero_bundle();
        let fallback = resolve_in(&table, Variant::Modern, Section::Hero)(&bundle).to_html();
        let default = professional::hero(&bundle).to_html();
        assert_eq!(fallback, default);
    }

    #[test]
    fn pair_absent_everywhere_renders_nothing() {
        let table = RendererTable::new();
        let html = resolve_in(&table, Variant::Coastal, Section::Team)(&hero_bundle()).to_html();
        assert!(html.is_empty());
    }

    #[test]
    fn strict_lookup_reports_the_missing_pair() {
        let table = RendererTable::new();
        let err = lookup_in(&table, Variant::Modern, Section::BlogRoll).unwrap_err();
        assert_eq!(
            err,
            SectionError::MissingImplementation {
                variant: Variant::Modern,
                section: Section::BlogRoll,
            }
        );
    }

    #[test]
    fn renderer_handed_the_wrong_bundle_renders_nothing() {
        let html = resolve(Variant::Professional, Section::Team)(&hero_bundle()).to_html();
        assert!(html.is_empty());
    }
}
