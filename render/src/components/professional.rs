//! Professional variant: conservative, trust-forward styling. This is the
//! default section set, so it is also what unknown variants and
//! not-yet-rolled-out sections fall back to.

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
        <section class="pro-hero">
            <div class="container">
                <div class="pro-hero-grid">
                    <div class="pro-hero-content">
                        <h1 class="pro-hero-heading">{c.heading}</h1>
                        <p class="pro-hero-tagline">{c.tagline}</p>
                        {(!c.cta_label.is_empty()).then(|| view! {
                            <a href=c.cta_href.clone() class="btn btn-primary">{c.cta_label.clone()}</a>
                        })}
                    </div>
                    {c.image.map(|src| view! {
                        <div class="pro-hero-media">
                            <img src=src alt="" />
                        </div>
                    })}
                </div>
            </div>
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
        <section class="pro-intro">
            <div class="container">
                <h2 class="section-title">{c.heading}</h2>
                {c.paragraphs
                    .into_iter()
                    .map(|p| view! { <p class="pro-intro-paragraph">{p}</p> })
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
        <section class="pro-policies">
            <div class="container">
                <h2 class="section-title">{c.heading}</h2>
                {c.location.map(|loc| view! {
                    <p class="pro-policies-location">
                        "Serving you from our " {loc.label} " office."
                    </p>
                })}
                <dl class="pro-policy-list">
                    {c.policies
                        .into_iter()
                        .map(|p| {
                            view! {
                                <div class="pro-policy-row">
                                    <dt class="pro-policy-name">{p.name}</dt>
                                    <dd class="pro-policy-blurb">{p.blurb}</dd>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </dl>
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
    view! {
        <section class="pro-testimonials">
            <div class="container">
                <h2 class="section-title">{c.heading}</h2>
                <div class="pro-testimonial-list">
                    {c.items
                        .into_iter()
                        .map(|t| {
                            let stars = t.stars();
                            view! {
                                <figure class="testimonial">
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
        <section class="pro-cta">
            <div class="container">
                <h2 class="pro-cta-heading">{c.heading}</h2>
                <p class="pro-cta-body">{c.body}</p>
                <div class="pro-cta-actions">
                    {(!c.button_label.is_empty()).then(|| view! {
                        <a href=c.button_href.clone() class="btn btn-primary">{c.button_label.clone()}</a>
                    })}
                    {c.phone.map(|phone| view! {
                        <a href=format!("tel:{phone}") class="pro-cta-phone">{phone.clone()}</a>
                    })}
                </div>
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
        <section class="pro-faq">
            <div class="container">
                <p class="section-eyebrow">{tagline}</p>
                <h2 class="section-title">{c.subtitle}</h2>
                <p class="section-description">{c.description}</p>
                <FaqEntries items=inline />
                {overflow.then(|| view! {
                    <a href=Page::Faq.path() class="faq-view-all">"View all questions →"</a>
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
        <section class="pro-faq-listing">
            <div class="container">
                {categories
                    .into_iter()
                    .map(|cat| {
                        let tagline = faq_tagline(&cat);
                        view! {
                            <div class="pro-faq-category">
                                <h2 class="section-title">{tagline}</h2>
                                <p class="section-description">{cat.description}</p>
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
        <section class="pro-careers">
            <div class="container">
                <h2 class="section-title">{c.heading}</h2>
                <p class="section-description">{c.intro}</p>
                <ul class="pro-opening-list">
                    {c.openings
                        .into_iter()
                        .map(|job| {
                            view! {
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
        <section class="pro-team">
            <div class="container">
                <h2 class="section-title">{c.heading}</h2>
                <div class="pro-team-grid">
                    {c.members
                        .into_iter()
                        .map(|m| {
                            view! {
                                <article class="team-card">
                                    {m.photo.map(|src| view! {
                                        <img class="team-photo" src=src alt=m.name.clone() />
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
        <section class="pro-blog">
            <div class="container">
                <h2 class="section-title">{c.heading}</h2>
                <ul class="pro-post-list">
                    {c.posts
                        .into_iter()
                        .map(|post| {
                            let href = format!("/blog/{}", post.slug);
                            view! {
                                <li class="post">
                                    <a href=href class="post-title">{post.title}</a>
                                    <span class="post-date">{post.date}</span>
                                    <p class="post-excerpt">{post.excerpt}</p>
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

pub(crate) fn contact_panel(content: &SectionContent) -> AnyView {
    let Some(c) = content.contact_panel() else {
        return view! {}.into_any();
    };
    let c = c.clone();
    let office = match c.location {
        Some(loc) => view! {
            <div class="contact-grid">
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
                    <label>"How can we help?" <textarea name="message"></textarea></label>
                    <button type="submit" class="btn btn-primary">"Send message"</button>
                </form>
            </div>
        }
        .into_any(),
        // No primary office: inline message, never a crash.
        None => view! { <p class="contact-unavailable">{UNAVAILABLE_MESSAGE}</p> }.into_any(),
    };
    view! {
        <section class="pro-contact">
            <div class="container">
                <h2 class="section-title">{c.heading}</h2>
                <p class="section-description">{c.blurb}</p>
                {office}
                {c.email.map(|email| view! {
                    <p class="contact-email">
                        "Prefer email? " <a href=format!("mailto:{email}")>{email.clone()}</a>
                    </p>
                })}
            </div>
        </section>
    }
    .into_any()
}
