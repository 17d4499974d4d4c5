pub mod employment;
pub mod name_synonym;
pub mod person;
