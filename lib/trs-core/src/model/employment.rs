use shared_types::{EmploymentId, PersonId};

/// Point-in-time payroll/pension extract for a person.
///
/// Only the NINO is consulted during matching. Names and dates of birth held by the extract are
/// never compared, because the extract may diverge from the authoritative person record.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Employment {
    pub id: EmploymentId,
    pub person_id: PersonId,
    pub national_insurance_number: Option<String>,
    pub postcode: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq, Default)]
pub struct EmploymentRelations {}
