//! Coastal variant: airy palette and soft shapes for waterfront agencies.

use leptos::prelude::*;

use coverleaf::content::{SectionContent, UNAVAILABLE_MESSAGE};
use coverleaf::Page;

use super::shared::{faq_tagline, preview_split, FaqEntries, StarRating};

pub(crate) fn hero(content: &SectionContent) -> AnyView {
    let Some(c) = content.hero() else {
        return view! {}.into_any();
    };
    let c = c.clone();
    view! {
        <section class="coast-hero">
            <div class="container coast-hero-inner">
                <h1 class="coast-hero-heading">{c.heading}</h1>
                <p class="coast-hero-tagline">{c.tagline}</p>
                {(!c.cta_label.is_empty()).then(|| view! {
                    <a href=c.cta_href.clone() class="btn btn-primary">{c.cta_label.clone()}</a>
                })}
                {c.image.map(|src| view! {
                    <img class="coast-hero-image" src=src alt="" />
                })}
            </div>
            <div class="coast-wave" aria-hidden="true"></div>
        </section>
    }
    .into_any()
}

pub(crate) fn intro(content: &SectionContent) -> AnyView {
    let Some(c) = content.intro() else {
        return view! {}.into_any();
    };
    let c = c.clone();
    view! {
        <section class="coast-intro">
            <div class="container coast-narrow">
                <h2 class="coast-heading">{c.heading}</h2>
                {c.paragraphs
                    .into_iter()
                    .map(|p| view! { <p>{p}</p> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
    .into_any()
}

pub(crate) fn location_policies(content: &SectionContent) -> AnyView {
    let Some(c) = content.location_policies() else {
        return view! {}.into_any();
    };
    if !c.show_section || c.policies.is_empty() {
        return view! {}.into_any();
    }
    let c = c.clone();
    view! {
        <section class="coast-policies">
            <div class="container">
                <h2 class="coast-heading">{c.heading}</h2>
                {c.location.map(|loc| view! {
                    <p class="coast-policies-location">
                        "Rooted in " {loc.city} ", " {loc.state} "."
                    </p>
                })}
                <ul class="coast-policy-list">
                    {c.policies
                        .into_iter()
                        .map(|p| {
                            view! {
                                <li class="coast-policy">
                                    <span class="coast-policy-marker" aria-hidden="true"></span>
                                    <div>
                                        <h3 class="coast-policy-name">{p.name}</h3>
                                        <p class="coast-policy-blurb">{p.blurb}</p>
                                    </div>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
        </section>
    }
    .into_any()
}

pub(crate) fn testimonials(content: &SectionContent) -> AnyView {
    let Some(c) = content.testimonials() else {
        return view! {}.into_any();
    };
    if c.items.is_empty() {
        return view! {}.into_any();
    }
    let c = c.clone();
    let count = c.items.len();
    view! {
        <section class="coast-testimonials">
            <div class="container coast-narrow">
                <h2 class="coast-heading">{c.heading}</h2>
                <div class="carousel">
                    <div class="carousel-track">
                        {c.items
                            .into_iter()
                            .enumerate()
                            .map(|(i, t)| {
                                let class = if i == 0 { "carousel-slide active" } else { "carousel-slide" };
                                let stars = t.stars();
                                view! {
                                    <figure class=format!("{class} coast-quote")>
                                        <span class="coast-quote-mark" aria-hidden="true">"\u{201C}"</span>
                                        <blockquote class="testimonial-content">{t.content}</blockquote>
                                        {stars.map(|s| view! { <StarRating stars=s /> })}
                                        <figcaption class="testimonial-author">
                                            <span class="testimonial-name">{t.author}</span>
                                            {t.title.map(|title| view! {
                                                <span class="testimonial-title">{title}</span>
                                            })}
                                        </figcaption>
                                    </figure>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                    <div class="carousel-dots">
                        {(0..count)
                            .map(|i| {
                                let class = if i == 0 { "carousel-dot active" } else { "carousel-dot" };
                                view! { <span class=class></span> }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </section>
    }
    .into_any()
}

pub(crate) fn home_cta(content: &SectionContent) -> AnyView {
    let Some(c) = content.home_cta() else {
        return view! {}.into_any();
    };
    let c = c.clone();
    view! {
        <section class="coast-cta">
            <div class="container coast-narrow">
                <h2 class="coast-cta-heading">{c.heading}</h2>
                <p class="coast-cta-body">{c.body}</p>
                {(!c.button_label.is_empty()).then(|| view! {
                    <a href=c.button_href.clone() class="btn btn-primary">{c.button_label.clone()}</a>
                })}
                {c.phone.map(|phone| view! {
                    <p class="coast-cta-phone">
                        "Or call us at " <a href=format!("tel:{phone}")>{phone.clone()}</a>
                    </p>
                })}
            </div>
        </section>
    }
    .into_any()
}

pub(crate) fn faq_preview(content: &SectionContent) -> AnyView {
    let Some(c) = content.faq_preview() else {
        return view! {}.into_any();
    };
    if !c.show_section || c.items.is_empty() {
        return view! {}.into_any();
    }
    let tagline = faq_tagline(c);
    let (inline, overflow) = preview_split(&c.items);
    let c = c.clone();
    view! {
        <section class="coast-faq">
            <div class="container coast-narrow">
                <h2 class="coast-heading">{tagline}</h2>
                <p class="coast-faq-subtitle">{c.subtitle}</p>
                <p class="coast-faq-description">{c.description}</p>
                <FaqEntries items=inline />
                {overflow.then(|| view! {
                    <div class="coast-faq-more">
                        <a href=Page::Faq.path() class="faq-view-all">"See every question"</a>
                    </div>
                })}
            </div>
        </section>
    }
    .into_any()
}

pub(crate) fn faq_listing(content: &SectionContent) -> AnyView {
    let Some(c) = content.faq_listing() else {
        return view! {}.into_any();
    };
    let categories: Vec<_> = c
        .categories
        .iter()
        .filter(|cat| cat.show_section && !cat.items.is_empty())
        .cloned()
        .collect();
    if categories.is_empty() {
        return view! {}.into_any();
    }
    view! {
        <section class="coast-faq-listing">
            <div class="container coast-narrow">
                {categories
                    .into_iter()
                    .map(|cat| {
                        let tagline = faq_tagline(&cat);
                        view! {
                            <div class="coast-faq-category">
                                <h2 class="coast-heading">{tagline}</h2>
                                <p class="coast-faq-description">{cat.description}</p>
                                <FaqEntries items=cat.items />
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
    .into_any()
}

pub(crate) fn careers(content: &SectionContent) -> AnyView {
    let Some(c) = content.careers() else {
        return view! {}.into_any();
    };
    if !c.show_section || c.openings.is_empty() {
        return view! {}.into_any();
    }
    let c = c.clone();
    view! {
        <section class="coast-careers">
            <div class="container coast-narrow">
                <h2 class="coast-heading">{c.heading}</h2>
                <p>{c.intro}</p>
                <ul class="coast-opening-list">
                    {c.openings
                        .into_iter()
                        .map(|job| {
                            view! {
                                <li class="opening">
                                    <h3 class="opening-title">{job.title}</h3>
                                    <span class="opening-location">{job.location}</span>
                                    <p class="opening-summary">{job.summary}</p>
                                    {job.apply_url.map(|url| view! {
                                        <a href=url class="opening-apply">"Come aboard →"</a>
                                    })}
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
        </section>
    }
    .into_any()
}

pub(crate) fn team(content: &SectionContent) -> AnyView {
    let Some(c) = content.team() else {
        return view! {}.into_any();
    };
    if c.members.is_empty() {
        return view! {}.into_any();
    }
    let c = c.clone();
    view! {
        <section class="coast-team">
            <div class="container">
                <h2 class="coast-heading">{c.heading}</h2>
                <div class="coast-team-grid">
                    {c.members
                        .into_iter()
                        .map(|m| {
                            view! {
                                <article class="team-card coast-team-card">
                                    {m.photo.map(|src| view! {
                                        <img class="team-photo coast-round" src=src alt=m.name.clone() />
                                    })}
                                    <h3 class="team-name">{m.name}</h3>
                                    <p class="team-role">{m.role}</p>
                                    <p class="team-bio">{m.bio}</p>
                                </article>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
    .into_any()
}

pub(crate) fn blog_roll(content: &SectionContent) -> AnyView {
    let Some(c) = content.blog_roll() else {
        return view! {}.into_any();
    };
    if c.posts.is_empty() {
        return view! {}.into_any();
    }
    let c = c.clone();
    view! {
        <section class="coast-blog">
            <div class="container coast-narrow">
                <h2 class="coast-heading">{c.heading}</h2>
                {c.posts
                    .into_iter()
                    .map(|post| {
                        let href = format!("/blog/{}", post.slug);
                        view! {
                            <article class="coast-post post">
                                <span class="post-date">{post.date}</span>
                                <a href=href class="post-title">{post.title}</a>
                                <p class="post-excerpt">{post.excerpt}</p>
                            </article>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
    .into_any()
}

pub(crate) fn contact_panel(content: &SectionContent) -> AnyView {
    let Some(c) = content.contact_panel() else {
        return view! {}.into_any();
    };
    let c = c.clone();
    let office = match c.location {
        Some(loc) => view! {
            <div class="coast-contact-stack">
                <address class="office-card">
                    <h3 class="office-label">{loc.label}</h3>
                    <p>{loc.street}</p>
                    <p>{format!("{}, {} {}", loc.city, loc.state, loc.postal_code)}</p>
                    {loc.phone.map(|phone| view! {
                        <a href=format!("tel:{phone}") class="office-phone">{phone.clone()}</a>
                    })}
                </address>
                <form class="contact-form" action="#" method="post">
                    <label>"Name" <input type="text" name="name" /></label>
                    <label>"Email" <input type="email" name="email" /></label>
                    <label>"What brings you by?" <textarea name="message"></textarea></label>
                    <button type="submit" class="btn btn-primary">"Say hello"</button>
                </form>
            </div>
        }
        .into_any(),
        None => view! { <p class="contact-unavailable">{UNAVAILABLE_MESSAGE}</p> }.into_any(),
    };
    view! {
        <section class="coast-contact">
            <div class="container coast-narrow">
                <h2 class="coast-heading">{c.heading}</h2>
                <p>{c.blurb}</p>
                {office}
                {c.email.map(|email| view! {
                    <p class="contact-email">
                        <a href=format!("mailto:{email}")>{email.clone()}</a>
                    </p>
                })}
            </div>
        </section>
    }
    .into_any()
}
