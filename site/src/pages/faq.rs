// FAQ page - full listing with search on top
use crate::sections::{FaqListing, SearchBar};
use leptos::prelude::*;

#[component]
pub fn FaqPage() -> impl IntoView {
    view! {
        <section class="page-header">
            <div class="container">
                <h1 class="page-title">"Frequently asked questions"</h1>
                <SearchBar />
            </div>
        </section>
        <FaqListing />
    }
}
