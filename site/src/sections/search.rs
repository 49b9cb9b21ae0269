// FAQ search: the bar builds a `?q=` navigation target on submit, Escape
// cancels in-progress typing and closes the hint overlay, and the results
// page reads the same parameter back.

use leptos::ev::{KeyboardEvent, SubmitEvent};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_query_map};

use coverleaf::content::FaqCategory;
use coverleaf::search::{search_faqs, search_target};

use crate::client::ActiveClient;

#[component]
pub fn SearchBar() -> impl IntoView {
    let (query, set_query) = signal(String::new());
    let (overlay_open, set_overlay_open) = signal(false);
    let navigate = use_navigate();

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        set_overlay_open.set(false);
        navigate(&search_target(&query.get()), Default::default());
    };

    let keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Escape" {
            set_query.set(String::new());
            set_overlay_open.set(false);
        }
    };

    view! {
        <form class="search-bar" on:submit=submit>
            <input
                type="search"
                class="search-input"
                placeholder="Search our FAQs"
                prop:value=move || query.get()
                on:input=move |ev| {
                    set_query.set(event_target_value(&ev));
                    set_overlay_open.set(true);
                }
                on:keydown=keydown
            />
            <button type="submit" class="search-submit">"Search"</button>
            <Show when=move || overlay_open.get() && !query.get().trim().is_empty()>
                <div class="search-hint">"Enter to search · Esc to clear"</div>
            </Show>
        </form>
    }
}

#[component]
pub fn SearchResults() -> impl IntoView {
    let client = expect_context::<ActiveClient>();
    let (categories, set_categories) = signal(Vec::<FaqCategory>::new());
    spawn_local(async move {
        set_categories.set(client.source.faq_categories(&client.id).await);
    });

    let query_map = use_query_map();
    let query = move || {
        query_map
            .with(|map| map.get("q"))
            .filter(|q| !q.trim().is_empty())
    };

    view! {
        <section class="search-results">
            <div class="container">
                {move || match query() {
                    // Absent parameter means "no query yet", not an error.
                    None => view! {
                        <p class="search-empty">"Type a question above to search our FAQs."</p>
                    }
                    .into_any(),
                    Some(q) => {
                        let hits = search_faqs(&categories.get(), &q);
                        if hits.is_empty() {
                            view! {
                                <p class="search-empty">
                                    {format!("No answers matched \u{201C}{q}\u{201D}.")}
                                </p>
                            }
                            .into_any()
                        } else {
                            view! {
                                <p class="search-count">
                                    {format!("{} answer(s) for \u{201C}{q}\u{201D}", hits.len())}
                                </p>
                                <div class="faq-list">
                                    {hits
                                        .into_iter()
                                        .map(|item| view! {
                                            <div class="faq-item open">
                                                <h3 class="faq-question">{item.question}</h3>
                                                <div class="faq-answer">
                                                    <p>{item.answer}</p>
                                                </div>
                                            </div>
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                            .into_any()
                        }
                    }
                }}
            </div>
        </section>
    }
}
