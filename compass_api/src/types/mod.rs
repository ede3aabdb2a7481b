mod record;
pub use self::record::{Record, RecordID, Resource};

mod link;
pub use self::link::{CompanyLink, ContactLink};

mod token;
pub use self::token::{TokenGrant, UserCredentials};
