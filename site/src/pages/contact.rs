// Contact page
use crate::sections::ContactPanel;
use leptos::prelude::*;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <section class="page-header">
            <div class="container">
                <h1 class="page-title">"Contact"</h1>
                <p class="page-description">"Reach the office, or send us a note."</p>
            </div>
        </section>
        <ContactPanel />
    }
}
