use leptos::prelude::*;
use leptos::task::spawn_local;

use coverleaf::content::JobOpening;

use crate::client::ActiveClient;

#[component]
pub fn CareersSection() -> impl IntoView {
    let client = expect_context::<ActiveClient>();
    let (openings, set_openings) = signal(Vec::<JobOpening>::new());
    spawn_local(async move {
        set_openings.set(client.source.job_openings(&client.id).await);
    });

    view! {
        {move || {
            let openings = openings.get();
            // No openings: render nothing rather than an empty shell.
            (!openings.is_empty()).then(|| view! {
                <section class="careers">
                    <div class="container">
                        <h2 class="section-title">"Open positions"</h2>
                        <p class="section-description">
                            "We're growing. Join an agency that takes care of its own."
                        </p>
                        <ul class="opening-list">
                            {openings
                                .iter()
                                .cloned()
                                .map(|job| view! {
                                    <li class="opening">
                                        <div class="opening-main">
                                            <span class="opening-title">{job.title}</span>
                                            <span class="opening-location">{job.location}</span>
                                        </div>
                                        <p class="opening-summary">{job.summary}</p>
                                        {job.apply_url.map(|url| view! {
                                            <a href=url class="opening-apply">"Apply →"</a>
                                        })}
                                    </li>
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    </div>
                </section>
            })
        }}
    }
}
