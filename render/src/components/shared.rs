//! Pieces shared by every variant's section set.
//!
//! Content shape is identical across variants, so the bits with real
//! rules - the star scale, the FAQ preview cap, the default tagline -
//! live here once and the variants wrap them in their own markup.

use leptos::prelude::*;

use coverleaf::content::{FaqCategory, FaqItem, DEFAULT_FAQ_TAGLINE, FAQ_PREVIEW_LIMIT};

/// Five-star rating row. `stars` is already clamped by
/// [`coverleaf::content::Testimonial::stars`]; this clamps again only to
/// keep the invariant local.
#[component]
pub fn StarRating(stars: u8) -> impl IntoView {
    let stars = stars.min(5);
    view! {
        <span class="stars" aria-label=format!("{stars} out of 5 stars")>
            {(0..5u8)
                .map(|i| {
                    let class = if i < stars { "star filled" } else { "star empty" };
                    view! { <span class=class>"★"</span> }
                })
                .collect::<Vec<_>>()}
        </span>
    }
}

/// Static question/answer list. The CSR app swaps this for its accordion;
/// server output keeps every answer visible.
#[component]
pub fn FaqEntries(items: Vec<FaqItem>) -> impl IntoView {
    view! {
        <div class="faq-list">
            {items
                .into_iter()
                .map(|item| {
                    view! {
                        <div class="faq-item">
                            <h4 class="faq-question">{item.question}</h4>
                            <div class="faq-answer">
                                <p>{item.answer}</p>
                            </div>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

/// Split a FAQ item list for the preview section: at most
/// [`FAQ_PREVIEW_LIMIT`] items inline, plus whether a "view all" link is
/// needed instead of overflowing.
pub(crate) fn preview_split(items: &[FaqItem]) -> (Vec<FaqItem>, bool) {
    if items.len() > FAQ_PREVIEW_LIMIT {
        (items[..FAQ_PREVIEW_LIMIT].to_vec(), true)
    } else {
        (items.to_vec(), false)
    }
}

/// Category tagline with the documented fallback for absent content.
pub(crate) fn faq_tagline(category: &FaqCategory) -> String {
    if category.tagline.trim().is_empty() {
        DEFAULT_FAQ_TAGLINE.to_string()
    } else {
        category.tagline.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<FaqItem> {
        (0..n)
            .map(|i| FaqItem {
                question: format!("Question {i}?"),
                answer: format!("Answer {i}."),
            })
            .collect()
    }

    #[test]
    fn preview_caps_long_lists_and_flags_overflow() {
        let (inline, overflow) = preview_split(&items(7));
        assert_eq!(inline.len(), FAQ_PREVIEW_LIMIT);
        assert!(overflow);
        assert_eq!(inline[0].question, "Question 0?");
    }

    #[test]
    fn preview_passes_short_lists_through() {
        let (inline, overflow) = preview_split(&items(5));
        assert_eq!(inline.len(), 5);
        assert!(!overflow);

        let (inline, overflow) = preview_split(&items(0));
        assert!(inline.is_empty());
        assert!(!overflow);
    }

    #[test]
    fn empty_tagline_gets_the_default_heading() {
        let cat = FaqCategory::default();
        assert_eq!(faq_tagline(&cat), DEFAULT_FAQ_TAGLINE);

        let cat = FaqCategory {
            tagline: "Claims questions".into(),
            ..Default::default()
        };
        assert_eq!(faq_tagline(&cat), "Claims questions");
    }
}
