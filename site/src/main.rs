// Coverleaf client site — Leptos 0.8 CSR
//
// One build serves every client agency: the active client's content and
// configured variant are looked up at mount, and the variant only ever
// changes which theme class wraps the shell - every section keeps the
// same content contract.

mod client;
mod pages;
mod sections;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use coverleaf::Variant;

use pages::*;
use sections::{Footer, Nav};

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}

#[component]
fn App() -> impl IntoView {
    let active = client::active_client();
    provide_context(active.clone());

    // Variant resolves once per page load; until the profile arrives the
    // default variant's theme applies.
    let (variant, set_variant) = signal(Variant::default());
    {
        let active = active.clone();
        spawn_local(async move {
            if let Some(profile) = active.source.client_profile(&active.id).await {
                let variant = Variant::parse(&profile.variant);
                web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(&format!(
                    "[coverleaf] client {} · variant {}",
                    active.id,
                    variant.slug()
                )));
                set_variant.set(variant);
            }
        });
    }

    view! {
        <Router>
            <div class=move || format!("site-shell theme-{}", variant.get().slug())>
                <Nav />
                <main>
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/about") view=AboutPage />
                        <Route path=path!("/contact") view=ContactPage />
                        <Route path=path!("/faq") view=FaqPage />
                        <Route path=path!("/blog") view=BlogPage />
                        <Route path=path!("/careers") view=CareersPage />
                        <Route path=path!("/team") view=TeamPage />
                        <Route path=path!("/search") view=SearchPage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <section class="page-header">
            <div class="container">
                <h1 class="page-title">"Page not found"</h1>
                <p class="page-description">
                    "That page doesn't exist. " <a href="/">"Back to the homepage"</a>
                </p>
            </div>
        </section>
    }
}
