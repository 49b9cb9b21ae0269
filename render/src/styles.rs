//! CSS for rendered client pages.
//!
//! [`BASE_CSS`] carries layout and the shared component styling (header,
//! footer, FAQ list, testimonial cards, star scale). Each variant then
//! contributes a theme block - palette, type, and the handful of
//! structural overrides that give the variant its character. The two are
//! concatenated per page by [`crate::render_page`].

use coverleaf::Variant;

/// Shared layout and component styles, variant-independent.
pub const BASE_CSS: &str = r#"
:root {
    --container-max: 1080px;
}

*, *::before, *::after {
    box-sizing: border-box;
}

body {
    margin: 0;
    font-family: var(--theme-font, system-ui, sans-serif);
    background: var(--theme-bg, #ffffff);
    color: var(--theme-text, #1a2330);
    line-height: 1.6;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 24px;
}

main > section {
    padding: 56px 0;
}

a {
    color: var(--theme-accent, #1d4ed8);
}

.btn {
    display: inline-block;
    padding: 12px 28px;
    border-radius: var(--theme-radius, 6px);
    text-decoration: none;
    font-weight: 600;
    border: 1px solid transparent;
}

.btn-primary {
    background: var(--theme-accent, #1d4ed8);
    color: #ffffff;
}

.btn-ghost {
    border-color: currentColor;
    color: inherit;
    background: transparent;
}

/* Header / footer */
.site-header {
    border-bottom: 1px solid var(--theme-border, #e2e8f0);
    background: var(--theme-header-bg, transparent);
}

.site-header-inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 24px;
    padding-top: 16px;
    padding-bottom: 16px;
}

.site-brand {
    display: flex;
    flex-direction: column;
    text-decoration: none;
    color: inherit;
}

.site-brand-name {
    font-weight: 700;
    font-size: 18px;
}

.site-brand-place {
    font-size: 12px;
    opacity: 0.7;
}

.site-nav {
    display: flex;
    flex-wrap: wrap;
    gap: 18px;
}

.site-nav-link {
    text-decoration: none;
    color: inherit;
    font-size: 14px;
}

.site-nav-link.active {
    color: var(--theme-accent, #1d4ed8);
    font-weight: 600;
}

.site-footer {
    border-top: 1px solid var(--theme-border, #e2e8f0);
    padding: 32px 0;
    font-size: 13px;
    opacity: 0.85;
}

/* FAQ */
.faq-list {
    margin-top: 24px;
}

.faq-item {
    border-bottom: 1px solid var(--theme-border, #e2e8f0);
    padding: 14px 0;
}

.faq-question {
    margin: 0;
    font-size: 16px;
}

.faq-answer p {
    margin: 8px 0 0;
    opacity: 0.85;
}

.faq-view-all {
    display: inline-block;
    margin-top: 18px;
    font-weight: 600;
}

/* Testimonials */
.testimonial {
    margin: 0;
    padding: 20px;
    border: 1px solid var(--theme-border, #e2e8f0);
    border-radius: var(--theme-radius, 6px);
}

.testimonial-content {
    margin: 0 0 10px;
    font-style: italic;
}

.testimonial-author {
    display: flex;
    gap: 8px;
    font-size: 14px;
}

.testimonial-name {
    font-weight: 600;
}

.testimonial-title {
    opacity: 0.7;
}

.stars {
    display: inline-flex;
    gap: 2px;
    margin-bottom: 8px;
}

.star.filled {
    color: var(--theme-star, #f59e0b);
}

.star.empty {
    color: var(--theme-border, #e2e8f0);
}

/* Carousel shell (CSR drives slide switching) */
.carousel-slide {
    display: none;
}

.carousel-slide.active {
    display: block;
}

.carousel-dots {
    display: flex;
    justify-content: center;
    gap: 8px;
    margin-top: 16px;
}

.carousel-dot {
    width: 10px;
    height: 10px;
    border-radius: 50%;
    background: var(--theme-border, #e2e8f0);
}

.carousel-dot.active {
    background: var(--theme-accent, #1d4ed8);
}

/* Openings, team, posts */
.opening-title {
    font-weight: 700;
}

.opening-location {
    font-size: 13px;
    opacity: 0.7;
    margin-left: 8px;
}

.team-photo {
    width: 96px;
    height: 96px;
    object-fit: cover;
}

.team-role {
    font-size: 14px;
    color: var(--theme-accent, #1d4ed8);
    margin: 2px 0 8px;
}

.post-title {
    font-weight: 700;
    text-decoration: none;
}

.post-date {
    font-size: 13px;
    opacity: 0.7;
}

/* Contact */
.contact-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 32px;
    margin-top: 24px;
}

.contact-form label {
    display: block;
    margin-bottom: 14px;
    font-size: 14px;
}

.contact-form input,
.contact-form textarea {
    display: block;
    width: 100%;
    margin-top: 4px;
    padding: 10px;
    border: 1px solid var(--theme-border, #e2e8f0);
    border-radius: var(--theme-radius, 6px);
    font: inherit;
}

.office-card {
    font-style: normal;
}

.contact-unavailable {
    padding: 20px;
    border: 1px dashed var(--theme-border, #e2e8f0);
    border-radius: var(--theme-radius, 6px);
    opacity: 0.8;
}

@media (max-width: 720px) {
    .contact-grid {
        grid-template-columns: 1fr;
    }
}
"#;

/// Professional theme: navy and slate, serif display type, square corners.
pub const PROFESSIONAL_CSS: &str = r#"
.theme-professional {
    --theme-font: Georgia, 'Times New Roman', serif;
    --theme-bg: #fdfdfb;
    --theme-text: #16243a;
    --theme-accent: #17355e;
    --theme-border: #d8dde5;
    --theme-star: #b98a1e;
    --theme-radius: 2px;
    --theme-header-bg: #ffffff;
}

.theme-professional .pro-hero {
    background: #eef1f5;
}

.theme-professional .pro-hero-grid {
    display: grid;
    grid-template-columns: 3fr 2fr;
    gap: 40px;
    align-items: center;
}

.theme-professional .pro-hero-heading {
    font-size: 40px;
    margin: 0 0 12px;
}

.theme-professional .section-eyebrow {
    text-transform: uppercase;
    letter-spacing: 0.12em;
    font-size: 12px;
    color: var(--theme-accent);
    margin: 0;
}

.theme-professional .pro-policy-row {
    display: grid;
    grid-template-columns: 220px 1fr;
    gap: 16px;
    padding: 12px 0;
    border-bottom: 1px solid var(--theme-border);
}

.theme-professional .pro-testimonial-list {
    display: grid;
    gap: 20px;
}

.theme-professional .pro-cta {
    background: var(--theme-accent);
    color: #ffffff;
    text-align: center;
}

.theme-professional .pro-cta a {
    color: #ffffff;
}

.theme-professional .pro-team-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
    gap: 24px;
}
"#;

/// Modern theme: near-black surfaces, electric accent, heavy sans type.
pub const MODERN_CSS: &str = r#"
.theme-modern {
    --theme-font: 'Inter', 'Helvetica Neue', sans-serif;
    --theme-bg: #0e1116;
    --theme-text: #e8ecf2;
    --theme-accent: #38bdf8;
    --theme-border: #263041;
    --theme-star: #fbbf24;
    --theme-radius: 10px;
    --theme-header-bg: #0e1116;
}

.theme-modern .mod-hero {
    padding: 96px 0;
    background-size: cover;
    background-position: center;
}

.theme-modern .mod-hero-heading {
    font-size: 52px;
    line-height: 1.1;
    margin: 0 0 16px;
    letter-spacing: -0.02em;
}

.theme-modern .mod-section-heading {
    font-size: 30px;
    letter-spacing: -0.01em;
}

.theme-modern .mod-card-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
    gap: 20px;
}

.theme-modern .mod-card {
    background: #161c26;
    border: 1px solid var(--theme-border);
    border-radius: var(--theme-radius);
    padding: 22px;
    color: inherit;
    text-decoration: none;
}

.theme-modern .mod-intro-grid {
    display: grid;
    grid-template-columns: 1fr 2fr;
    gap: 40px;
}

.theme-modern .mod-intro-lead {
    font-size: 20px;
}

.theme-modern .mod-cta-split {
    display: flex;
    justify-content: space-between;
    align-items: center;
    gap: 32px;
    flex-wrap: wrap;
}

.theme-modern .mod-phone-chip {
    border: 1px solid var(--theme-accent);
    border-radius: 999px;
    padding: 8px 18px;
    text-decoration: none;
}

.theme-modern .mod-team-initials {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 64px;
    height: 64px;
    border-radius: 50%;
    background: var(--theme-accent);
    color: #0e1116;
    font-weight: 700;
    font-size: 22px;
}

.theme-modern .mod-faq-header {
    display: flex;
    justify-content: space-between;
    align-items: flex-end;
    gap: 24px;
}
"#;

/// Coastal theme: sea-glass palette, rounded shapes, generous whitespace.
pub const COASTAL_CSS: &str = r#"
.theme-coastal {
    --theme-font: 'Avenir Next', 'Segoe UI', sans-serif;
    --theme-bg: #f7fbfc;
    --theme-text: #23404a;
    --theme-accent: #0e7490;
    --theme-border: #cfe5ea;
    --theme-star: #e8a431;
    --theme-radius: 14px;
    --theme-header-bg: #f7fbfc;
}

.theme-coastal .coast-hero {
    text-align: center;
    background: linear-gradient(#e3f2f6, #f7fbfc);
    padding-bottom: 0;
}

.theme-coastal .coast-hero-heading {
    font-size: 44px;
    margin: 0 0 12px;
    color: #174652;
}

.theme-coastal .coast-wave {
    height: 48px;
    background: radial-gradient(60% 100% at 50% 0%, #cfe5ea 0%, transparent 70%);
}

.theme-coastal .coast-narrow {
    max-width: 760px;
}

.theme-coastal .coast-heading {
    font-size: 30px;
    color: #174652;
}

.theme-coastal .coast-policy {
    display: flex;
    gap: 14px;
    padding: 12px 0;
    list-style: none;
}

.theme-coastal .coast-policy-marker {
    flex: none;
    width: 12px;
    height: 12px;
    margin-top: 8px;
    border-radius: 50%;
    background: var(--theme-accent);
}

.theme-coastal .coast-quote {
    border: none;
    background: #ffffff;
    box-shadow: 0 10px 30px rgba(14, 116, 144, 0.08);
}

.theme-coastal .coast-quote-mark {
    font-size: 48px;
    color: var(--theme-accent);
    line-height: 1;
}

.theme-coastal .coast-team-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
    gap: 28px;
    text-align: center;
}

.theme-coastal .coast-round {
    border-radius: 50%;
}

.theme-coastal .coast-cta {
    text-align: center;
    background: #e3f2f6;
    border-radius: var(--theme-radius);
}
"#;

/// The theme block for a resolved variant.
pub fn theme_css(variant: Variant) -> &'static str {
    match variant {
        Variant::Professional => PROFESSIONAL_CSS,
        Variant::Modern => MODERN_CSS,
        Variant::Coastal => COASTAL_CSS,
    }
}
