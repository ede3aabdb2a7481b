//! Sub-resources reachable under a single company or contact.

/// Collections hanging off `companies/{id}/`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompanyLink {
    Addresses,
    Contacts,
    Divisions,
    Offices,
    PracticeAreas,
    Prequalifications,
    PrimaryCategories,
    Studios,
    Territories,
    CompanyTypes,
    Users,
}

impl CompanyLink {
    pub fn path(&self) -> &'static str {
        match self {
            CompanyLink::Addresses => "addresses",
            CompanyLink::Contacts => "contacts",
            CompanyLink::Divisions => "divisions",
            CompanyLink::Offices => "offices",
            CompanyLink::PracticeAreas => "practiceareas",
            CompanyLink::Prequalifications => "prequalifications",
            CompanyLink::PrimaryCategories => "primarycategories",
            CompanyLink::Studios => "studios",
            CompanyLink::Territories => "territories",
            CompanyLink::CompanyTypes => "companytypes",
            CompanyLink::Users => "users",
        }
    }
}

/// Collections hanging off `contacts/{id}/`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactLink {
    Company,
    Category,
    Divisions,
    Offices,
}

impl ContactLink {
    pub fn path(&self) -> &'static str {
        match self {
            ContactLink::Company => "company",
            ContactLink::Category => "contact_category",
            ContactLink::Divisions => "divisions",
            ContactLink::Offices => "offices",
        }
    }
}
