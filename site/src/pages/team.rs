// Team page
use crate::sections::TeamGrid;
use leptos::prelude::*;

#[component]
pub fn TeamPage() -> impl IntoView {
    view! {
        <section class="page-header">
            <div class="container">
                <h1 class="page-title">"Our team"</h1>
            </div>
        </section>
        <TeamGrid heading="Agents who live where you live" />
    }
}
