// Careers page
use crate::sections::CareersSection;
use leptos::prelude::*;

#[component]
pub fn CareersPage() -> impl IntoView {
    view! {
        <section class="page-header">
            <div class="container">
                <h1 class="page-title">"Careers"</h1>
            </div>
        </section>
        <CareersSection />
    }
}
