mod macros;

mod employment_id;
mod person_id;

pub use employment_id::EmploymentId;
pub use person_id::PersonId;
