//! Modern variant: bold type, card grids, high contrast.

use leptos::prelude::*;

use coverleaf::content::{SectionContent, UNAVAILABLE_MESSAGE};
use coverleaf::Page;

use super::shared::{faq_tagline, preview_split, FaqEntries, StarRating};

pub(crate) fn hero(content: &SectionContent) -> AnyView {
    let Some(c) = content.hero() else {
        return view! {}.into_any();
    };
    let c = c.clone();
    let backdrop = c
        .image
        .map(|src| format!("background-image:url('{src}')"))
        .unwrap_or_default();
    view! {
        <section class="mod-hero" style=backdrop>
            <div class="container">
                <h1 class="mod-hero-heading">{c.heading}</h1>
                <p class="mod-hero-tagline">{c.tagline}</p>
                {(!c.cta_label.is_empty()).then(|| view! {
                    <a href=c.cta_href.clone() class="btn btn-ghost">{c.cta_label.clone()}</a>
                })}
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
    let mut paragraphs = c.paragraphs.into_iter();
    let lead = paragraphs.next();
    view! {
        <section class="mod-intro">
            <div class="container mod-intro-grid">
                <h2 class="mod-intro-heading">{c.heading}</h2>
                <div class="mod-intro-body">
                    {lead.map(|p| view! { <p class="mod-intro-lead">{p}</p> })}
                    {paragraphs.map(|p| view! { <p>{p}</p> }).collect::<Vec<_>>()}
                </div>
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
        <section class="mod-policies">
            <div class="container">
                <h2 class="mod-section-heading">{c.heading}</h2>
                {c.location.map(|loc| view! {
                    <p class="mod-policies-location">{loc.label} " · " {loc.city} ", " {loc.state}</p>
                })}
                <div class="mod-card-grid">
                    {c.policies
                        .into_iter()
                        .map(|p| {
                            view! {
                                <article class="mod-card">
                                    <h3 class="mod-card-title">{p.name}</h3>
                                    <p class="mod-card-body">{p.blurb}</p>
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

/// Static shell of the carousel: every slide is in the markup, the first
/// is active, dots mirror the slide count. The CSR app drives the motion.
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
        <section class="mod-testimonials">
            <div class="container">
                <h2 class="mod-section-heading">{c.heading}</h2>
                <div class="carousel">
                    <div class="carousel-track">
                        {c.items
                            .into_iter()
                            .enumerate()
                            .map(|(i, t)| {
                                let class = if i == 0 { "carousel-slide active" } else { "carousel-slide" };
                                let stars = t.stars();
                                view! {
                                    <figure class=class>
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
        <section class="mod-cta">
            <div class="container mod-cta-split">
                <div>
                    <h2 class="mod-cta-heading">{c.heading}</h2>
                    <p class="mod-cta-body">{c.body}</p>
                </div>
                <div class="mod-cta-actions">
                    {(!c.button_label.is_empty()).then(|| view! {
                        <a href=c.button_href.clone() class="btn btn-primary">{c.button_label.clone()}</a>
                    })}
                    {c.phone.map(|phone| view! {
                        <a href=format!("tel:{phone}") class="mod-phone-chip">{phone.clone()}</a>
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
        <section class="mod-faq">
            <div class="container">
                <div class="mod-faq-header">
                    <div>
                        <h2 class="mod-section-heading">{tagline}</h2>
                        <p class="mod-faq-subtitle">{c.subtitle}</p>
                    </div>
                    {overflow.then(|| view! {
                        <a href=Page::Faq.path() class="faq-view-all">"View all"</a>
                    })}
                </div>
                <FaqEntries items=inline />
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
        <section class="mod-faq-listing">
            <div class="container mod-faq-columns">
                {categories
                    .into_iter()
                    .map(|cat| {
                        let tagline = faq_tagline(&cat);
                        view! {
                            <div class="mod-card mod-faq-category">
                                <h2 class="mod-section-heading">{tagline}</h2>
                                <p class="mod-faq-subtitle">{cat.subtitle}</p>
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
        <section class="mod-careers">
            <div class="container">
                <h2 class="mod-section-heading">{c.heading}</h2>
                <p class="mod-careers-intro">{c.intro}</p>
                <div class="mod-card-grid">
                    {c.openings
                        .into_iter()
                        .map(|job| {
                            view! {
                                <article class="mod-card opening">
                                    <h3 class="opening-title">{job.title}</h3>
                                    <span class="opening-location">{job.location}</span>
                                    <p class="opening-summary">{job.summary}</p>
                                    {job.apply_url.map(|url| view! {
                                        <a href=url class="opening-apply">"Apply"</a>
                                    })}
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

pub(crate) fn team(content: &SectionContent) -> AnyView {
    let Some(c) = content.team() else {
        return view! {}.into_any();
    };
    if c.members.is_empty() {
        return view! {}.into_any();
    }
    let c = c.clone();
    view! {
        <section class="mod-team">
            <div class="container">
                <h2 class="mod-section-heading">{c.heading}</h2>
                <div class="mod-card-grid">
                    {c.members
                        .into_iter()
                        .map(|m| {
                            let avatar = match m.photo {
                                Some(src) => view! {
                                    <img class="team-photo" src=src alt=m.name.clone() />
                                }
                                .into_any(),
                                None => view! {
                                    <span class="mod-team-initials">{initials(&m.name)}</span>
                                }
                                .into_any(),
                            };
                            view! {
                                <article class="mod-card team-card">
                                    {avatar}
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
        <section class="mod-blog">
            <div class="container">
                <h2 class="mod-section-heading">{c.heading}</h2>
                <div class="mod-card-grid">
                    {c.posts
                        .into_iter()
                        .map(|post| {
                            let href = format!("/blog/{}", post.slug);
                            view! {
                                <a href=href class="mod-card post">
                                    <div class="post-meta">
                                        {post.tag.map(|tag| view! { <span class="post-tag">{tag}</span> })}
                                        <span class="post-date">{post.date}</span>
                                    </div>
                                    <h3 class="post-title">{post.title}</h3>
                                    <p class="post-excerpt">{post.excerpt}</p>
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
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
                <form class="contact-form" action="#" method="post">
                    <label>"Name" <input type="text" name="name" /></label>
                    <label>"Email" <input type="email" name="email" /></label>
                    <label>"Message" <textarea name="message"></textarea></label>
                    <button type="submit" class="btn btn-primary">"Send"</button>
                </form>
                <address class="office-card">
                    <h3 class="office-label">{loc.label}</h3>
                    <p>{loc.street}</p>
                    <p>{format!("{}, {} {}", loc.city, loc.state, loc.postal_code)}</p>
                    {loc.phone.map(|phone| view! {
                        <a href=format!("tel:{phone}") class="office-phone">{phone.clone()}</a>
                    })}
                </address>
            </div>
        }
        .into_any(),
        None => view! { <p class="contact-unavailable">{UNAVAILABLE_MESSAGE}</p> }.into_any(),
    };
    view! {
        <section class="mod-contact">
            <div class="container">
                <h2 class="mod-section-heading">{c.heading}</h2>
                <p class="mod-contact-blurb">{c.blurb}</p>
                {office}
                {c.email.map(|email| view! {
                    <a href=format!("mailto:{email}") class="contact-email">{email.clone()}</a>
                })}
            </div>
        </section>
    }
    .into_any()
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(initials("Dana Whitfield"), "DW");
        assert_eq!(initials("Cher"), "C");
        assert_eq!(initials("Ana Maria Ruiz"), "AM");
    }
}
