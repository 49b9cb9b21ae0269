use leptos::prelude::*;
use leptos::task::spawn_local;

use coverleaf::content::UNAVAILABLE_MESSAGE;
use coverleaf::ClientProfile;

use crate::client::ActiveClient;

#[component]
pub fn ContactPanel() -> impl IntoView {
    let client = expect_context::<ActiveClient>();
    let (profile, set_profile) = signal(None::<ClientProfile>);
    spawn_local(async move {
        set_profile.set(client.source.client_profile(&client.id).await);
    });

    view! {
        <section class="contact">
            <div class="container">
                {move || profile.get().map(|p| {
                    let email = p.contact_email.clone();
                    let office = match p.primary_location() {
                        Ok(loc) => {
                            let loc = loc.clone();
                            view! {
                                <div class="contact-grid">
                                    <address class="office-card">
                                        <h3 class="office-label">{loc.label}</h3>
                                        <p>{loc.street}</p>
                                        <p>{format!("{}, {} {}", loc.city, loc.state, loc.postal_code)}</p>
                                        {loc.phone.map(|phone| view! {
                                            <a href=format!("tel:{phone}") class="office-phone">{phone}</a>
                                        })}
                                    </address>
                                    <form class="contact-form" action="#" method="post">
                                        <label>"Name" <input type="text" name="name" /></label>
                                        <label>"Email" <input type="email" name="email" /></label>
                                        <label>"How can we help?" <textarea name="message"></textarea></label>
                                        <button type="submit" class="btn btn-primary">"Send message"</button>
                                    </form>
                                </div>
                            }
                            .into_any()
                        }
                        // No primary office on file: inline message, not a
                        // broken form.
                        Err(_) => view! {
                            <p class="contact-unavailable">{UNAVAILABLE_MESSAGE}</p>
                        }
                        .into_any(),
                    };
                    view! {
                        {office}
                        {email.map(|email| view! {
                            <p class="contact-email">
                                "Prefer email? " <a href=format!("mailto:{email}")>{email}</a>
                            </p>
                        })}
                    }
                })}
            </div>
        </section>
    }
}
