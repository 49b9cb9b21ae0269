use leptos::prelude::*;
use leptos::task::spawn_local;

use coverleaf::ClientProfile;

use crate::client::ActiveClient;

#[component]
pub fn Footer() -> impl IntoView {
    let client = expect_context::<ActiveClient>();
    let (profile, set_profile) = signal(None::<ClientProfile>);
    {
        let client = client.clone();
        spawn_local(async move {
            set_profile.set(client.source.client_profile(&client.id).await);
        });
    }

    view! {
        <footer class="footer">
            <div class="container">
                {move || profile.get().map(|p| {
                    let address = p.primary_location.as_ref().map(|loc| {
                        format!("{}, {}, {} {}", loc.street, loc.city, loc.state, loc.postal_code)
                    });
                    view! {
                        <p class="footer-name">{p.agency_name.clone()}</p>
                        {address.map(|a| view! { <p class="footer-address">{a}</p> })}
                        <p class="footer-note">
                            "Licensed in " {p.state.clone()} ". Coverage subject to policy terms."
                        </p>
                    }
                })}
            </div>
        </footer>
    }
}
