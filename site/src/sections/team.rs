use leptos::prelude::*;
use leptos::task::spawn_local;

use coverleaf::content::TeamMember;

use crate::client::ActiveClient;

#[component]
pub fn TeamGrid(heading: &'static str) -> impl IntoView {
    let client = expect_context::<ActiveClient>();
    let (members, set_members) = signal(Vec::<TeamMember>::new());
    spawn_local(async move {
        set_members.set(client.source.team(&client.id).await);
    });

    view! {
        {move || {
            let members = members.get();
            (!members.is_empty()).then(|| view! {
                <section class="team">
                    <div class="container">
                        <h2 class="section-title">{heading}</h2>
                        <div class="team-grid">
                            {members
                                .iter()
                                .cloned()
                                .map(|m| view! {
                                    <article class="team-card">
                                        {m.photo.map(|src| view! {
                                            <img class="team-photo" src=src alt=m.name.clone() />
                                        })}
                                        <h3 class="team-name">{m.name}</h3>
                                        <p class="team-role">{m.role}</p>
                                        <p class="team-bio">{m.bio}</p>
                                    </article>
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>
                </section>
            })
        }}
    }
}
