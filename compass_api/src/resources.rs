//! Named per-entity shortcuts over the generic resource methods.

use serde_json::Value;

use crate::{
    errors::Result,
    pager::RecordPager,
    query::ListQuery,
    types::{CompanyLink, ContactLink, Record, RecordID, Resource},
    Client,
};

impl Client {
    // Company methods

    pub async fn get_company_schema(&self) -> Result<Value> {
        self.get_schema(Resource::Company).await
    }

    pub async fn get_company(&self, company_id: RecordID) -> Result<Record> {
        self.get_record(Resource::Company, company_id).await
    }

    /// Fetches `limit` companies starting at `offset` (the API allows at most 250).
    pub async fn get_company_list(&self, limit: u32, offset: u64) -> Result<Vec<Record>> {
        self.get_list(Resource::Company, &ListQuery::new(limit, offset))
            .await
    }

    pub fn get_company_pager(&self) -> RecordPager<'_> {
        self.pager(Resource::Company)
    }

    pub async fn search_companies(&self, query: &str) -> Result<Vec<Record>> {
        self.search(Resource::Company, query).await
    }

    pub async fn get_company_addresses(&self, company_id: RecordID) -> Result<Value> {
        self.get_company_link(company_id, CompanyLink::Addresses)
            .await
    }

    pub async fn get_company_contacts(&self, company_id: RecordID) -> Result<Value> {
        self.get_company_link(company_id, CompanyLink::Contacts)
            .await
    }

    pub async fn get_company_divisions(&self, company_id: RecordID) -> Result<Value> {
        self.get_company_link(company_id, CompanyLink::Divisions)
            .await
    }

    pub async fn get_company_offices(&self, company_id: RecordID) -> Result<Value> {
        self.get_company_link(company_id, CompanyLink::Offices)
            .await
    }

    pub async fn get_company_practice_areas(&self, company_id: RecordID) -> Result<Value> {
        self.get_company_link(company_id, CompanyLink::PracticeAreas)
            .await
    }

    pub async fn get_company_prequalifications(&self, company_id: RecordID) -> Result<Value> {
        self.get_company_link(company_id, CompanyLink::Prequalifications)
            .await
    }

    pub async fn get_company_primary_categories(&self, company_id: RecordID) -> Result<Value> {
        self.get_company_link(company_id, CompanyLink::PrimaryCategories)
            .await
    }

    pub async fn get_company_studios(&self, company_id: RecordID) -> Result<Value> {
        self.get_company_link(company_id, CompanyLink::Studios)
            .await
    }

    pub async fn get_company_territories(&self, company_id: RecordID) -> Result<Value> {
        self.get_company_link(company_id, CompanyLink::Territories)
            .await
    }

    pub async fn get_company_types(&self, company_id: RecordID) -> Result<Value> {
        self.get_company_link(company_id, CompanyLink::CompanyTypes)
            .await
    }

    pub async fn get_company_users(&self, company_id: RecordID) -> Result<Value> {
        self.get_company_link(company_id, CompanyLink::Users)
            .await
    }

    /// Updates the company identified by its `CompanyId` field.
    pub async fn update_company(&self, company: &Record) -> Result<Value> {
        self.update(Resource::Company, company).await
    }

    pub async fn create_company(&self, company: &Record) -> Result<Value> {
        self.create(Resource::Company, company).await
    }

    // Contact methods

    pub async fn get_contact_schema(&self) -> Result<Value> {
        self.get_schema(Resource::Contact).await
    }

    pub async fn get_contact(&self, contact_id: RecordID) -> Result<Record> {
        self.get_record(Resource::Contact, contact_id).await
    }

    /// Fetches `limit` contacts starting at `offset` (the API allows at most 250).
    pub async fn get_contact_list(&self, limit: u32, offset: u64) -> Result<Vec<Record>> {
        self.get_list(Resource::Contact, &ListQuery::new(limit, offset))
            .await
    }

    pub fn get_contact_pager(&self) -> RecordPager<'_> {
        self.pager(Resource::Contact)
    }

    pub async fn search_contacts(&self, query: &str) -> Result<Vec<Record>> {
        self.search(Resource::Contact, query).await
    }

    pub async fn get_contact_company(&self, contact_id: RecordID) -> Result<Value> {
        self.get_contact_link(contact_id, ContactLink::Company)
            .await
    }

    pub async fn get_contact_category(&self, contact_id: RecordID) -> Result<Value> {
        self.get_contact_link(contact_id, ContactLink::Category)
            .await
    }

    pub async fn get_contact_divisions(&self, contact_id: RecordID) -> Result<Value> {
        self.get_contact_link(contact_id, ContactLink::Divisions)
            .await
    }

    pub async fn get_contact_offices(&self, contact_id: RecordID) -> Result<Value> {
        self.get_contact_link(contact_id, ContactLink::Offices)
            .await
    }

    /// Updates the contact identified by its `ContactId` field.
    pub async fn update_contact(&self, contact: &Record) -> Result<Value> {
        self.update(Resource::Contact, contact).await
    }

    pub async fn create_contact(&self, contact: &Record) -> Result<Value> {
        self.create(Resource::Contact, contact).await
    }

    // Project methods

    pub async fn get_project_schema(&self) -> Result<Value> {
        self.get_schema(Resource::Project).await
    }

    pub async fn get_project(&self, project_id: RecordID) -> Result<Record> {
        self.get_record(Resource::Project, project_id).await
    }

    /// Fetches `limit` projects starting at `offset` (the API allows at most 250).
    pub async fn get_project_list(&self, limit: u32, offset: u64) -> Result<Vec<Record>> {
        self.get_list(Resource::Project, &ListQuery::new(limit, offset))
            .await
    }

    pub fn get_project_pager(&self) -> RecordPager<'_> {
        self.pager(Resource::Project)
    }

    pub async fn search_projects(&self, query: &str) -> Result<Vec<Record>> {
        self.search(Resource::Project, query).await
    }

    /// Updates the project identified by its `ProjectId` field.
    pub async fn update_project(&self, project: &Record) -> Result<Value> {
        self.update(Resource::Project, project).await
    }

    pub async fn create_project(&self, project: &Record) -> Result<Value> {
        self.create(Resource::Project, project).await
    }

    // Opportunity methods

    pub async fn get_opportunity_schema(&self) -> Result<Value> {
        self.get_schema(Resource::Opportunity).await
    }

    pub async fn get_opportunity(&self, opportunity_id: RecordID) -> Result<Record> {
        self.get_record(Resource::Opportunity, opportunity_id)
            .await
    }

    /// Fetches `limit` opportunities starting at `offset` (the API allows at most 250).
    pub async fn get_opportunity_list(&self, limit: u32, offset: u64) -> Result<Vec<Record>> {
        self.get_list(Resource::Opportunity, &ListQuery::new(limit, offset))
            .await
    }

    pub fn get_opportunity_pager(&self) -> RecordPager<'_> {
        self.pager(Resource::Opportunity)
    }

    pub async fn search_opportunities(&self, query: &str) -> Result<Vec<Record>> {
        self.search(Resource::Opportunity, query).await
    }

    /// Updates the opportunity identified by its `OpportunityId` field.
    pub async fn update_opportunity(&self, opportunity: &Record) -> Result<Value> {
        self.update(Resource::Opportunity, opportunity).await
    }

    /// Creates an opportunity. Unlike the other resources the record is
    /// posted as a bare object, not wrapped in an array.
    pub async fn create_opportunity(&self, opportunity: &Record) -> Result<Value> {
        self.create(Resource::Opportunity, opportunity).await
    }
}
