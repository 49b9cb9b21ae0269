//! Content source contract and the JSON-backed implementation.
//!
//! Fetchers are the only suspension points in the system. Every accessor
//! resolves to a value or to absence - never to an error the caller must
//! handle. A failed or malformed fetch is swallowed into the absent case;
//! nothing is retried. Sections fetch independently, so a failure in one
//! never blocks its siblings.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::content::{
    BlogPost, ClientProfile, CtaContent, FaqCategory, HeroContent, IntroContent, JobOpening,
    LocationPoliciesContent, TeamMember, Testimonial,
};

/// Everything a client site can ask its content source for.
///
/// Futures here are not `Send`; the renderers run single-threaded and
/// cooperative (wasm on the client, plain blocking in host tests).
#[allow(async_fn_in_trait)]
pub trait ContentSource {
    async fn client_profile(&self, client_id: &str) -> Option<ClientProfile>;
    async fn hero(&self, client_id: &str) -> Option<HeroContent>;
    async fn intro(&self, client_id: &str) -> Option<IntroContent>;
    async fn location_policies(&self, client_id: &str) -> Option<LocationPoliciesContent>;
    async fn home_cta(&self, client_id: &str) -> Option<CtaContent>;
    /// Ordered FAQ categories; the order of categories and of items within
    /// them is the source order.
    async fn faq_categories(&self, client_id: &str) -> Vec<FaqCategory>;
    async fn testimonials(&self, client_id: &str) -> Vec<Testimonial>;
    async fn team(&self, client_id: &str) -> Vec<TeamMember>;
    async fn job_openings(&self, client_id: &str) -> Vec<JobOpening>;
    async fn blog_posts(&self, client_id: &str) -> Vec<BlogPost>;
}

/// The full content bundle for one client, as the source delivers it.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ClientBundle {
    pub profile: ClientProfile,
    #[serde(default)]
    pub hero: Option<HeroContent>,
    #[serde(default)]
    pub intro: Option<IntroContent>,
    #[serde(default)]
    pub location_policies: Option<LocationPoliciesContent>,
    #[serde(default)]
    pub home_cta: Option<CtaContent>,
    #[serde(default)]
    pub faq: Vec<FaqCategory>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub team: Vec<TeamMember>,
    #[serde(default)]
    pub openings: Vec<JobOpening>,
    #[serde(default)]
    pub posts: Vec<BlogPost>,
}

/// A [`ContentSource`] over an in-memory map of client bundles, loaded
/// from JSON. Stands in for the external CMS: the shape on the wire is the
/// shape in [`ClientBundle`].
#[derive(Clone, Debug, Default)]
pub struct StaticSource {
    clients: HashMap<String, ClientBundle>,
}

impl StaticSource {
    /// Parse a `{ client_id: bundle }` JSON document. Malformed input
    /// yields an empty source - every lookup then resolves to absence,
    /// which is the documented degradation for a failed fetch.
    pub fn from_json(json: &str) -> StaticSource {
        let clients = serde_json::from_str(json).unwrap_or_default();
        StaticSource { clients }
    }

    pub fn client_ids(&self) -> impl Iterator<Item = &str> {
        self.clients.keys().map(String::as_str)
    }

    pub fn bundle(&self, client_id: &str) -> Option<&ClientBundle> {
        self.clients.get(client_id)
    }
}

impl ContentSource for StaticSource {
    async fn client_profile(&self, client_id: &str) -> Option<ClientProfile> {
        self.bundle(client_id).map(|b| b.profile.clone())
    }

    async fn hero(&self, client_id: &str) -> Option<HeroContent> {
        self.bundle(client_id).and_then(|b| b.hero.clone())
    }

    async fn intro(&self, client_id: &str) -> Option<IntroContent> {
        self.bundle(client_id).and_then(|b| b.intro.clone())
    }

    async fn location_policies(&self, client_id: &str) -> Option<LocationPoliciesContent> {
        self.bundle(client_id).and_then(|b| b.location_policies.clone())
    }

    async fn home_cta(&self, client_id: &str) -> Option<CtaContent> {
        self.bundle(client_id).and_then(|b| b.home_cta.clone())
    }

    async fn faq_categories(&self, client_id: &str) -> Vec<FaqCategory> {
        self.bundle(client_id).map(|b| b.faq.clone()).unwrap_or_default()
    }

    async fn testimonials(&self, client_id: &str) -> Vec<Testimonial> {
        self.bundle(client_id)
            .map(|b| b.testimonials.clone())
            .unwrap_or_default()
    }

    async fn team(&self, client_id: &str) -> Vec<TeamMember> {
        self.bundle(client_id).map(|b| b.team.clone()).unwrap_or_default()
    }

    async fn job_openings(&self, client_id: &str) -> Vec<JobOpening> {
        self.bundle(client_id)
            .map(|b| b.openings.clone())
            .unwrap_or_default()
    }

    async fn blog_posts(&self, client_id: &str) -> Vec<BlogPost> {
        self.bundle(client_id).map(|b| b.posts.clone()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    const FIXTURE: &str = r#"{
        "harbor-light": {
            "profile": {
                "agency_name": "Harbor Light Insurance",
                "city": "Wilmington",
                "state": "NC",
                "primary_location": null,
                "canonical_url": "https://harborlight.example.com",
                "variant": "coastal"
            },
            "faq": [
                {
                    "id": "coverage",
                    "tagline": "Coverage",
                    "items": [
                        {"question": "Is flood damage covered?", "answer": "Only with a flood policy."}
                    ]
                }
            ],
            "testimonials": [
                {"id": "t1", "author": "R. Alvarez", "content": "Fast claims.", "rating": 5}
            ]
        }
    }"#;

    #[test]
    fn known_client_resolves() {
        let source = StaticSource::from_json(FIXTURE);
        let profile = block_on(source.client_profile("harbor-light")).unwrap();
        assert_eq!(profile.agency_name, "Harbor Light Insurance");
        assert_eq!(profile.variant, "coastal");

        let faq = block_on(source.faq_categories("harbor-light"));
        assert_eq!(faq.len(), 1);
        assert_eq!(faq[0].items[0].question, "Is flood damage covered?");
    }

    #[test]
    fn unknown_client_resolves_to_absence() {
        let source = StaticSource::from_json(FIXTURE);
        assert!(block_on(source.client_profile("nobody")).is_none());
        assert!(block_on(source.testimonials("nobody")).is_empty());
        assert!(block_on(source.hero("nobody")).is_none());
    }

    #[test]
    fn malformed_json_degrades_to_empty_source() {
        let source = StaticSource::from_json("{not json");
        assert_eq!(source.client_ids().count(), 0);
        assert!(block_on(source.client_profile("harbor-light")).is_none());
    }

    #[test]
    fn sections_absent_from_the_bundle_are_absent() {
        let source = StaticSource::from_json(FIXTURE);
        assert!(block_on(source.hero("harbor-light")).is_none());
        assert!(block_on(source.team("harbor-light")).is_empty());
    }
}
