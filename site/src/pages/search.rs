// Search results page - reads the `q` URL parameter
use crate::sections::{SearchBar, SearchResults};
use leptos::prelude::*;

#[component]
pub fn SearchPage() -> impl IntoView {
    view! {
        <section class="page-header">
            <div class="container">
                <h1 class="page-title">"Search"</h1>
                <SearchBar />
            </div>
        </section>
        <SearchResults />
    }
}
