use leptos::prelude::*;
use leptos::task::spawn_local;

use coverleaf::{ClientProfile, Page};

use crate::client::ActiveClient;

#[component]
pub fn Nav() -> impl IntoView {
    let client = expect_context::<ActiveClient>();
    let (profile, set_profile) = signal(None::<ClientProfile>);
    {
        let client = client.clone();
        spawn_local(async move {
            set_profile.set(client.source.client_profile(&client.id).await);
        });
    }

    let (drawer_open, set_drawer_open) = signal(false);

    let brand = move || {
        profile
            .get()
            .map(|p| p.agency_name)
            .unwrap_or_else(|| "Your local agency".to_string())
    };
    let place = move || {
        profile
            .get()
            .map(|p| format!("{}, {}", p.city, p.state))
            .unwrap_or_default()
    };
    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a href="/" class="nav-brand">
                    <span class="nav-title">{brand}</span>
                    <span class="nav-place">{place}</span>
                </a>
                <div class="nav-links">
                    {Page::NAV
                        .into_iter()
                        .map(|p| view! { <a href=p.path() class="nav-link">{p.label()}</a> })
                        .collect::<Vec<_>>()}
                    <button
                        class=move || if drawer_open.get() { "nav-cta active" } else { "nav-cta" }
                        on:click=move |_| set_drawer_open.update(|o| *o = !*o)
                    >
                        {move || if drawer_open.get() { "Close" } else { "Get a Quote" }}
                    </button>
                </div>
            </div>

            // Dropdown drawer overlay
            <Show when=move || drawer_open.get()>
                <div class="nav-drawer">
                    <div class="nav-drawer-inner">
                        <p class="drawer-lead">"Quotes take about five minutes by phone."</p>
                        {move || match profile
                            .get()
                            .and_then(|p| p.primary_location)
                            .and_then(|loc| loc.phone)
                        {
                            Some(phone) => view! {
                                <a href=format!("tel:{phone}") class="drawer-phone">{phone}</a>
                            }
                            .into_any(),
                            None => view! {
                                <p class="drawer-phone-missing">
                                    "Phone quotes are currently unavailable."
                                </p>
                            }
                            .into_any(),
                        }}
                        <p class="drawer-alt">
                            "Prefer writing? "
                            <a href="/contact" on:click=move |_| set_drawer_open.set(false)>
                                "Send us a note"
                            </a>
                        </p>
                    </div>
                </div>
            </Show>
        </nav>
    }
}
