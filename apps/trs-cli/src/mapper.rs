use one_dto_mapper::convert_inner;
use trs_core::service::identity_matching::dto::{
    DigitalIdentityMatchOutcome, RegistrationMatchOutcome,
};

use crate::dto::{DigitalIdentityMatchOutcomeRestDTO, RegistrationMatchOutcomeRestDTO};

impl From<DigitalIdentityMatchOutcome> for DigitalIdentityMatchOutcomeRestDTO {
    fn from(value: DigitalIdentityMatchOutcome) -> Self {
        match value {
            DigitalIdentityMatchOutcome::NoMatch => Self::NoMatch,
            DigitalIdentityMatchOutcome::Match {
                person_id,
                reference_number,
                matched_attributes,
            } => Self::Match {
                person_id,
                reference_number,
                matched_attributes: convert_inner(matched_attributes),
            },
        }
    }
}

impl From<RegistrationMatchOutcome> for RegistrationMatchOutcomeRestDTO {
    fn from(value: RegistrationMatchOutcome) -> Self {
        match value {
            RegistrationMatchOutcome::NoMatches => Self::NoMatches,
            RegistrationMatchOutcome::PotentialMatches { person_ids } => {
                Self::PotentialMatches { person_ids }
            }
            RegistrationMatchOutcome::DefiniteMatch { person_id } => {
                Self::DefiniteMatch { person_id }
            }
        }
    }
}
