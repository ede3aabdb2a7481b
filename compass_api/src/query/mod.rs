mod common;
pub use self::common::Query;

mod list;
pub use self::list::{ListQuery, DEFAULT_LIMIT, MAX_LIMIT};

mod search;
pub use self::search::SearchQuery;
