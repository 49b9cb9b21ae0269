// Active client lookup: which agency's site this bundle is serving.
//
// The per-client configuration lookup is external to this codebase; the
// embedded JSON stands in for it. A `?client=` query parameter picks a
// different client from the bundle, which is how we preview every variant
// from one build.

use coverleaf::StaticSource;

pub const DEFAULT_CLIENT_ID: &str = "harbor-light";

const CONTENT_JSON: &str = include_str!("../content/clients.json");

/// The client this page load is rendering for, plus its content source.
#[derive(Clone)]
pub struct ActiveClient {
    pub id: String,
    pub source: StaticSource,
}

pub fn active_client() -> ActiveClient {
    let source = StaticSource::from_json(CONTENT_JSON);
    let id = client_id_from_url().unwrap_or_else(|| DEFAULT_CLIENT_ID.to_string());
    ActiveClient { id, source }
}

fn client_id_from_url() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    let qs = search.strip_prefix('?').unwrap_or(&search);
    for pair in qs.split('&') {
        if let Some((key, value)) = pair.split_once('=') {
            if key == "client" && !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }
    None
}
