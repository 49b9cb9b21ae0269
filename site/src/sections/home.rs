// Homepage sections: hero, intro, location policies, CTA band. Each
// fetches its own content and renders nothing while (or if) it is absent.

use leptos::prelude::*;
use leptos::task::spawn_local;

use coverleaf::content::{CtaContent, HeroContent, IntroContent, LocationPoliciesContent};

use crate::client::ActiveClient;

#[component]
pub fn Hero() -> impl IntoView {
    let client = expect_context::<ActiveClient>();
    let (content, set_content) = signal(None::<HeroContent>);
    spawn_local(async move {
        set_content.set(client.source.hero(&client.id).await);
    });

    view! {
        {move || content.get().map(|c| {
            let HeroContent { heading, tagline, image, cta_label, cta_href } = c;
            view! {
                <section class="hero">
                    <div class="container hero-inner">
                        <div class="hero-content">
                            <h1 class="hero-heading">{heading}</h1>
                            <p class="hero-tagline">{tagline}</p>
                            {(!cta_label.is_empty()).then(|| view! {
                                <a href=cta_href.clone() class="btn btn-primary">{cta_label.clone()}</a>
                            })}
                        </div>
                        {image.map(|src| view! {
                            <img class="hero-image" src=src alt="" />
                        })}
                    </div>
                </section>
            }
        })}
    }
}

#[component]
pub fn Intro() -> impl IntoView {
    let client = expect_context::<ActiveClient>();
    let (content, set_content) = signal(None::<IntroContent>);
    spawn_local(async move {
        set_content.set(client.source.intro(&client.id).await);
    });

    view! {
        {move || content.get().map(|c| view! {
            <section class="intro">
                <div class="container">
                    <h2 class="section-title">{c.heading}</h2>
                    {c.paragraphs
                        .into_iter()
                        .map(|p| view! { <p class="intro-paragraph">{p}</p> })
                        .collect::<Vec<_>>()}
                </div>
            </section>
        })}
    }
}

#[component]
pub fn LocationPolicies() -> impl IntoView {
    let client = expect_context::<ActiveClient>();
    let (content, set_content) = signal(None::<LocationPoliciesContent>);
    spawn_local(async move {
        set_content.set(client.source.location_policies(&client.id).await);
    });

    view! {
        {move || content.get().and_then(|c| {
            // Explicit opt-out flag and empty content both suppress the
            // section entirely - no empty shell.
            if !c.show_section || c.policies.is_empty() {
                return None;
            }
            Some(view! {
                <section class="policies">
                    <div class="container">
                        <h2 class="section-title">{c.heading}</h2>
                        {c.location.map(|loc| view! {
                            <p class="policies-location">
                                "Written out of our " {loc.label} " office."
                            </p>
                        })}
                        <ul class="policy-list">
                            {c.policies
                                .into_iter()
                                .map(|p| view! {
                                    <li class="policy">
                                        <span class="policy-name">{p.name}</span>
                                        <span class="policy-blurb">{p.blurb}</span>
                                    </li>
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    </div>
                </section>
            })
        })}
    }
}

#[component]
pub fn HomeCta() -> impl IntoView {
    let client = expect_context::<ActiveClient>();
    let (content, set_content) = signal(None::<CtaContent>);
    spawn_local(async move {
        set_content.set(client.source.home_cta(&client.id).await);
    });

    view! {
        {move || content.get().map(|c| {
            let CtaContent { heading, body, button_label, button_href, phone } = c;
            view! {
                <section class="cta">
                    <div class="container">
                        <h2 class="cta-heading">{heading}</h2>
                        <p class="cta-body">{body}</p>
                        <div class="cta-actions">
                            {(!button_label.is_empty()).then(|| view! {
                                <a href=button_href.clone() class="btn btn-primary">{button_label.clone()}</a>
                            })}
                            {phone.map(|phone| view! {
                                <a href=format!("tel:{phone}") class="cta-phone">{phone}</a>
                            })}
                        </div>
                    </div>
                </section>
            }
        })}
    }
}
