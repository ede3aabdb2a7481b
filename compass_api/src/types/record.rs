//! Schema-less records and the resource families that hold them.

use std::fmt;

use serde_json::{Map, Value};

use crate::errors::{Error, Result};

/// A single API record. The field set is defined by the server (see the
/// `schema/` endpoints), so records stay an ordered key/value map.
pub type Record = Map<String, Value>;

/// Identifier of a record within its resource family.
pub type RecordID = i64;

/// One entity family exposed by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resource {
    Company,
    Contact,
    Project,
    Opportunity,
}

impl Resource {
    /// Path segment under the API root.
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Company => "companies",
            Resource::Contact => "contacts",
            Resource::Project => "projects",
            Resource::Opportunity => "opportunities",
        }
    }

    /// Name of the field carrying the record id.
    pub fn id_field(&self) -> &'static str {
        match self {
            Resource::Company => "CompanyId",
            Resource::Contact => "ContactId",
            Resource::Project => "ProjectId",
            Resource::Opportunity => "OpportunityId",
        }
    }

    /// Reads the id of `record` as it should appear in a URL path.
    ///
    /// Accepts numeric ids and non-empty string ids; anything else is
    /// reported as [`Error::MissingId`].
    pub fn record_id(&self, record: &Record) -> Result<String> {
        match record.get(self.id_field()) {
            Some(Value::Number(n)) => Ok(n.to_string()),
            Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
            _ => Err(Error::MissingId(self.id_field())),
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
