//! Offset/size parameters for the `{resource}/` list endpoints.

use url::Url;

use super::Query;

/// Number of records a list call asks for when the caller does not say.
pub const DEFAULT_LIMIT: u32 = 50;

/// Largest page the API will return. Not enforced locally.
pub const MAX_LIMIT: u32 = 250;

/// Query for a list endpoint: `size` records starting at record `from`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListQuery {
    /// Number of records to return (`size`).
    pub limit: u32,
    /// Index of the first record to return (`from`).
    pub offset: u64,
}

impl Default for ListQuery {
    fn default() -> ListQuery {
        ListQuery {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl ListQuery {
    pub fn new(limit: u32, offset: u64) -> Self {
        Self { limit, offset }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }
}

impl Query for ListQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("size", &self.limit.to_string())
            .append_pair("from", &self.offset.to_string());
        url
    }
}
