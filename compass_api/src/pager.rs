//! Offset-based walk over every record of a resource.

use std::collections::VecDeque;

use crate::{
    errors::Result,
    query::{ListQuery, MAX_LIMIT},
    types::{Record, Resource},
    Client,
};

/// Page size used while walking a resource.
pub const BATCH_SIZE: u32 = MAX_LIMIT;

/// Lazily fetches a resource page by page, yielding one record at a time.
///
/// Page `n` is requested with `size=BATCH_SIZE&from=n*BATCH_SIZE`. Only an
/// empty page ends the walk; a short page is yielded and followed by one more
/// request. A failed request leaves the page index in place so the next call
/// asks for the same page again.
#[derive(Debug)]
pub struct RecordPager<'a> {
    client: &'a Client,
    resource: Resource,
    page: u64,
    buffer: VecDeque<Record>,
    exhausted: bool,
}

impl<'a> RecordPager<'a> {
    pub fn new(client: &'a Client, resource: Resource) -> Self {
        Self {
            client,
            resource,
            page: 0,
            buffer: VecDeque::new(),
            exhausted: false,
        }
    }

    pub fn resource(&self) -> Resource {
        self.resource
    }

    /// Offset the next page request will use.
    pub fn next_offset(&self) -> u64 {
        self.page * u64::from(BATCH_SIZE)
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Returns the next record, or `None` once an empty page has been seen.
    pub async fn next(&mut self) -> Result<Option<Record>> {
        if let Some(record) = self.buffer.pop_front() {
            return Ok(Some(record));
        }
        if self.exhausted {
            return Ok(None);
        }

        let query = ListQuery::new(BATCH_SIZE, self.next_offset());
        let page = self.client.get_list(self.resource, &query).await?;
        tracing::debug!(
            "{} page {} returned {} records",
            self.resource,
            self.page,
            page.len()
        );
        if page.is_empty() {
            self.exhausted = true;
            return Ok(None);
        }
        self.page += 1;
        self.buffer.extend(page);
        Ok(self.buffer.pop_front())
    }

    /// Drains the remaining records into a vector.
    pub async fn collect_all(mut self) -> Result<Vec<Record>> {
        let mut records = Vec::new();
        while let Some(record) = self.next().await? {
            records.push(record);
        }
        Ok(records)
    }
}
