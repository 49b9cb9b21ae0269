//! Root document component - the complete HTML page for one client.

use leptos::prelude::*;

use coverleaf::{ClientProfile, Page, Variant};

use crate::styles;

/// The complete HTML document: head with canonical metadata and the
/// variant's theme CSS, then header, resolved sections, footer.
#[component]
pub fn PageDocument(
    profile: ClientProfile,
    page: Page,
    variant: Variant,
    /// Sections already resolved through the variant registry, in page order.
    sections: Vec<AnyView>,
) -> impl IntoView {
    let title = if page == Page::Home {
        format!("{} - {} {}", profile.agency_name, profile.city, profile.state)
    } else {
        format!("{} | {}", page.label(), profile.agency_name)
    };
    let canonical = canonical_for(&profile, page);
    let css = format!("{}\n{}", styles::BASE_CSS, styles::theme_css(variant));
    let body_class = format!("theme-{}", variant.slug());

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <link rel="canonical" href=canonical />
                <style>{css}</style>
            </head>
            <body class=body_class>
                <SiteHeader profile=profile.clone() page=page />
                <main>{sections}</main>
                <SiteFooter profile=profile />
            </body>
        </html>
    }
}

/// Canonical URL for a page: the client's base URL joined with the route
/// path. The home path contributes nothing beyond the trailing slash.
pub(crate) fn canonical_for(profile: &ClientProfile, page: Page) -> String {
    let base = profile.canonical_url.trim_end_matches('/');
    match page {
        Page::Home => format!("{base}/"),
        _ => format!("{base}{}", page.path()),
    }
}

#[component]
fn SiteHeader(profile: ClientProfile, page: Page) -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="container site-header-inner">
                <a href="/" class="site-brand">
                    <span class="site-brand-name">{profile.agency_name}</span>
                    <span class="site-brand-place">{profile.city} ", " {profile.state}</span>
                </a>
                <nav class="site-nav">
                    {Page::NAV
                        .into_iter()
                        .map(|p| {
                            let class = if p == page { "site-nav-link active" } else { "site-nav-link" };
                            view! { <a href=p.path() class=class>{p.label()}</a> }
                        })
                        .collect::<Vec<_>>()}
                </nav>
            </div>
        </header>
    }
}

#[component]
fn SiteFooter(profile: ClientProfile) -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container">
                <p class="site-footer-name">{profile.agency_name.clone()}</p>
                {profile.primary_location.map(|loc| view! {
                    <p class="site-footer-address">
                        {loc.street} ", " {loc.city} ", " {loc.state} " " {loc.postal_code}
                    </p>
                })}
                <p class="site-footer-note">
                    "Licensed in " {profile.state} ". Coverage subject to policy terms."
                </p>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_joins_base_and_path() {
        let profile = ClientProfile {
            canonical_url: "https://harborlight.example.com/".into(),
            ..Default::default()
        };
        assert_eq!(
            canonical_for(&profile, Page::Home),
            "https://harborlight.example.com/"
        );
        assert_eq!(
            canonical_for(&profile, Page::Careers),
            "https://harborlight.example.com/careers"
        );
    }
}
