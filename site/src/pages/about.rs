// About page
use crate::sections::{HomeCta, Intro, TeamGrid};
use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="page-header">
            <div class="container">
                <h1 class="page-title">"About us"</h1>
            </div>
        </section>
        <Intro />
        <TeamGrid heading="The people behind the policies" />
        <HomeCta />
    }
}
