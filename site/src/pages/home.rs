// Home page - hero + the homepage section stack
use crate::sections::{FaqPreview, Hero, HomeCta, Intro, LocationPolicies, Testimonials};
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Hero />
        <Intro />
        <LocationPolicies />
        <Testimonials />
        <FaqPreview />
        <HomeCta />
    }
}
