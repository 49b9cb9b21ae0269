//! Search navigation and FAQ filtering.
//!
//! The contract with the rest of the site is a single URL parameter named
//! `q`: submitting a search writes it, the results page reads it, and an
//! absent parameter means "no query yet" - not an error.

use crate::content::{FaqCategory, FaqItem};
use crate::variant::Page;

/// Build the navigation target for a submitted query. The query is
/// percent-encoded; a blank query targets the bare search page.
pub fn search_target(query: &str) -> String {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        Page::Search.path().to_string()
    } else {
        format!("{}?q={}", Page::Search.path(), urlencoding::encode(trimmed))
    }
}

/// Read the `q` parameter out of a raw query string (with or without the
/// leading `?`). Returns `None` when the parameter is absent or blank.
pub fn query_param(query_string: &str) -> Option<String> {
    let qs = query_string.strip_prefix('?').unwrap_or(query_string);
    for pair in qs.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        if key == "q" {
            let decoded = urlencoding::decode(value).ok()?;
            let decoded = decoded.replace('+', " ");
            let trimmed = decoded.trim();
            if trimmed.is_empty() {
                return None;
            }
            return Some(trimmed.to_string());
        }
    }
    None
}

/// Case-insensitive substring match over question and answer text.
pub fn faq_matches(item: &FaqItem, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    item.question.to_lowercase().contains(&needle)
        || item.answer.to_lowercase().contains(&needle)
}

/// Filter every visible category's items down to those matching the
/// query, preserving source order. Hidden categories never surface in
/// results.
pub fn search_faqs(categories: &[FaqCategory], query: &str) -> Vec<FaqItem> {
    categories
        .iter()
        .filter(|cat| cat.show_section)
        .flat_map(|cat| cat.items.iter())
        .filter(|item| faq_matches(item, query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(items: &[(&str, &str)]) -> FaqCategory {
        FaqCategory {
            id: "test".into(),
            items: items
                .iter()
                .map(|(q, a)| FaqItem {
                    question: (*q).into(),
                    answer: (*a).into(),
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn target_percent_encodes_the_query() {
        assert_eq!(search_target("flood coverage"), "/search?q=flood%20coverage");
    }

    #[test]
    fn blank_query_targets_bare_search_page() {
        assert_eq!(search_target("   "), "/search");
    }

    #[test]
    fn absent_param_means_no_query_yet() {
        assert_eq!(query_param(""), None);
        assert_eq!(query_param("?page=2"), None);
        assert_eq!(query_param("?q="), None);
    }

    #[test]
    fn query_param_round_trips_the_target() {
        let target = search_target("umbrella policy");
        let (_, qs) = target.split_once('?').unwrap();
        assert_eq!(query_param(qs).as_deref(), Some("umbrella policy"));
    }

    #[test]
    fn matching_is_case_insensitive_over_both_fields() {
        let cats = [category(&[
            ("Does my policy cover FLOOD damage?", "Not by default."),
            ("How do I file a claim?", "Call your agent or use the portal."),
        ])];
        let hits = search_faqs(&cats, "flood");
        assert_eq!(hits.len(), 1);
        let hits = search_faqs(&cats, "PORTAL");
        assert_eq!(hits.len(), 1);
        assert!(hits[0].question.contains("claim"));
    }

    #[test]
    fn hidden_categories_never_surface_in_results() {
        let mut hidden = category(&[("Auto hidden?", "yes")]);
        hidden.show_section = false;
        let cats = [hidden, category(&[("Auto visible?", "yes")])];
        let hits = search_faqs(&cats, "auto");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].question, "Auto visible?");
    }

    #[test]
    fn results_preserve_source_order() {
        let cats = [
            category(&[("Auto one?", "yes"), ("Auto two?", "yes")]),
            category(&[("Auto three?", "yes")]),
        ];
        let hits = search_faqs(&cats, "auto");
        let questions: Vec<_> = hits.iter().map(|i| i.question.as_str()).collect();
        assert_eq!(questions, ["Auto one?", "Auto two?", "Auto three?"]);
    }
}
