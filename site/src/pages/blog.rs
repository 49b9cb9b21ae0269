// Blog page
use crate::sections::BlogRoll;
use leptos::prelude::*;

#[component]
pub fn BlogPage() -> impl IntoView {
    view! {
        <section class="page-header">
            <div class="container">
                <h1 class="page-title">"Blog"</h1>
                <p class="page-description">"News and plain-English coverage advice."</p>
            </div>
        </section>
        <BlogRoll />
    }
}
