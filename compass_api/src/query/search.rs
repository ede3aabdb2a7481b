use url::Url;

use super::Query;

/// Free-text query for the `{resource}/search` endpoints.
///
/// The text is form-encoded into the `q` parameter, so characters such as
/// `&`, `#` or spaces reach the server intact.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub q: String,
}

impl SearchQuery {
    pub fn new(q: &str) -> Self {
        Self { q: q.to_string() }
    }
}

impl Query for SearchQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut().append_pair("q", &self.q);
        url
    }
}
