//! Render a demo client's pages to static HTML files.
//!
//! Run with: `cargo run --example static_site`

use coverleaf::{ContentSource, Page, StaticSource};
use coverleaf_render::{collect_sections, render_page};
use futures::executor::block_on;

const DEMO_CONTENT: &str = r#"{
    "harbor-light": {
        "profile": {
            "agency_name": "Harbor Light Insurance",
            "city": "Wilmington",
            "state": "NC",
            "primary_location": {
                "id": "hq",
                "label": "Riverfront Office",
                "street": "112 Water St",
                "city": "Wilmington",
                "state": "NC",
                "postal_code": "28401",
                "phone": "(910) 555-0182"
            },
            "canonical_url": "https://harborlight.example.com",
            "contact_email": "hello@harborlight.example.com",
            "variant": "coastal"
        },
        "hero": {
            "heading": "Coverage for life on the water",
            "tagline": "Home, auto, boat, and flood - handled by neighbors.",
            "cta_label": "Get a quote",
            "cta_href": "/contact"
        },
        "testimonials": [
            {"id": "t1", "author": "R. Alvarez", "content": "They found flood gaps two other agencies missed.", "rating": 5},
            {"id": "t2", "author": "P. Nguyen", "title": "Marina owner", "content": "Claims handled in days, not months.", "rating": 4}
        ],
        "faq": [
            {
                "id": "coverage",
                "tagline": "Coverage questions",
                "subtitle": "What our policies handle",
                "items": [
                    {"question": "Is flood damage covered by homeowners insurance?", "answer": "Not by default - flood coverage is a separate policy."},
                    {"question": "Do you insure boats year-round?", "answer": "Yes, including winter storage."}
                ]
            }
        ],
        "home_cta": {
            "heading": "Ready when the weather isn't",
            "body": "Talk to a local agent before the season turns.",
            "button_label": "Start a quote",
            "button_href": "/contact",
            "phone": "(910) 555-0182"
        }
    }
}"#;

fn main() {
    let source = StaticSource::from_json(DEMO_CONTENT);
    let client_id = "harbor-light";

    let profile = block_on(source.client_profile(client_id)).expect("demo client exists");

    for (page, file) in [
        (Page::Home, "home.html"),
        (Page::Faq, "faq.html"),
        (Page::Contact, "contact.html"),
    ] {
        let sections = block_on(collect_sections(&source, client_id, page));
        let html = render_page(&profile, page, &sections);
        std::fs::write(file, &html).expect("failed to write page");
        println!("{file}: {} bytes", html.len());
    }
}
