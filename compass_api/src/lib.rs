mod client;
mod errors;
mod pager;
mod query;
mod resources;
pub mod types;
pub use self::client::{Body, Client, RequestOptions, DEFAULT_ENDPOINT, TEST_ENDPOINT};
pub use self::errors::{Error, HttpError, Result};
pub use self::pager::{RecordPager, BATCH_SIZE};
pub use self::query::{ListQuery, Query, SearchQuery, DEFAULT_LIMIT, MAX_LIMIT};
pub use reqwest::header::{HeaderMap, HeaderValue};
pub use reqwest::Method;
