// FAQ sections: capped preview on the homepage, full listing on the FAQ
// page. Both share the single-open accordion - opening a question closes
// whichever one was open before it.

use leptos::prelude::*;
use leptos::task::spawn_local;

use coverleaf::content::{FaqCategory, DEFAULT_FAQ_TAGLINE, FAQ_PREVIEW_LIMIT};
use coverleaf::state::Accordion;
use coverleaf::Page;

use crate::client::ActiveClient;

#[component]
pub fn FaqPreview() -> impl IntoView {
    let client = expect_context::<ActiveClient>();
    let (category, set_category) = signal(None::<FaqCategory>);
    spawn_local(async move {
        let categories = client.source.faq_categories(&client.id).await;
        set_category.set(
            categories
                .into_iter()
                .find(|cat| cat.show_section && !cat.items.is_empty()),
        );
    });

    view! {
        {move || category.get().map(|cat| {
            let overflow = cat.items.len() > FAQ_PREVIEW_LIMIT;
            let inline = if overflow {
                cat.items[..FAQ_PREVIEW_LIMIT].to_vec()
            } else {
                cat.items.clone()
            };
            let tagline = if cat.tagline.trim().is_empty() {
                DEFAULT_FAQ_TAGLINE.to_string()
            } else {
                cat.tagline.clone()
            };
            view! {
                <section class="faq-preview">
                    <div class="container">
                        <h2 class="section-title">{tagline}</h2>
                        <p class="section-description">{cat.description.clone()}</p>
                        <FaqAccordion items=inline />
                        {overflow.then(|| view! {
                            <a href=Page::Faq.path() class="faq-view-all">"View all questions →"</a>
                        })}
                    </div>
                </section>
            }
        })}
    }
}

#[component]
pub fn FaqListing() -> impl IntoView {
    let client = expect_context::<ActiveClient>();
    let (categories, set_categories) = signal(Vec::<FaqCategory>::new());
    spawn_local(async move {
        set_categories.set(client.source.faq_categories(&client.id).await);
    });

    view! {
        {move || {
            let categories: Vec<_> = categories
                .get()
                .into_iter()
                .filter(|cat| cat.show_section && !cat.items.is_empty())
                .collect();
            categories
                .into_iter()
                .map(|cat| {
                    let tagline = if cat.tagline.trim().is_empty() {
                        DEFAULT_FAQ_TAGLINE.to_string()
                    } else {
                        cat.tagline.clone()
                    };
                    view! {
                        <section class="faq-category">
                            <div class="container">
                                <h2 class="section-title">{tagline}</h2>
                                <p class="section-description">{cat.description.clone()}</p>
                                <FaqAccordion items=cat.items />
                            </div>
                        </section>
                    }
                })
                .collect::<Vec<_>>()
        }}
    }
}

/// Single-open accordion over a question list. Each accordion instance
/// owns its state; two categories on the FAQ page open independently.
#[component]
fn FaqAccordion(items: Vec<coverleaf::content::FaqItem>) -> impl IntoView {
    let (accordion, set_accordion) = signal(Accordion::closed());

    view! {
        <div class="faq-list">
            {items
                .into_iter()
                .enumerate()
                .map(|(i, item)| {
                    let question = item.question;
                    let answer = item.answer;
                    view! {
                        <div class=move || {
                            if accordion.get().is_open(i) { "faq-item open" } else { "faq-item" }
                        }>
                            <button
                                class="faq-question"
                                on:click=move |_| set_accordion.update(|a| a.toggle(i))
                            >
                                {question}
                                <span class="faq-indicator">
                                    {move || if accordion.get().is_open(i) { "−" } else { "+" }}
                                </span>
                            </button>
                            <Show when=move || accordion.get().is_open(i)>
                                <div class="faq-answer">
                                    <p>{answer.clone()}</p>
                                </div>
                            </Show>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
