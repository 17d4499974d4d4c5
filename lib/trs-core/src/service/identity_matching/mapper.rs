use itertools::Itertools;

use super::attribute_matcher::MatchCriteria;
use super::dto::{
    DigitalIdentityClaimDTO, MatchSuggestionDTO, PersonMatch, RegistrationRequestDTO,
};
use crate::config::core_config::MatchingConfig;
use crate::util::normalization::{
    name_tokens, normalize_email_address, normalize_name, normalize_national_insurance_number,
    normalize_reference_number,
};

pub(super) fn criteria_from_digital_identity_claim(
    claim: &DigitalIdentityClaimDTO,
    config: &MatchingConfig,
) -> MatchCriteria {
    MatchCriteria {
        name_tokens: limit_name_tokens(name_tokens(claim.names.iter().flatten()), config),
        first_name: None,
        middle_name: None,
        last_name: None,
        dates_of_birth: claim.dates_of_birth.iter().copied().unique().collect(),
        national_insurance_number: claim
            .national_insurance_number
            .as_deref()
            .and_then(normalize_national_insurance_number),
        reference_number: claim
            .reference_number
            .as_deref()
            .and_then(normalize_reference_number),
        reference_number_hint: claim
            .reference_number_hint
            .as_deref()
            .and_then(normalize_reference_number),
        email_address: claim
            .email_address
            .as_deref()
            .and_then(normalize_email_address),
        gender: claim.gender,
    }
}

pub(super) fn criteria_from_registration_request(
    request: &RegistrationRequestDTO,
    config: &MatchingConfig,
) -> MatchCriteria {
    MatchCriteria {
        name_tokens: limit_name_tokens(name_tokens(&request.full_name), config),
        first_name: request.first_name.as_deref().and_then(normalize_name),
        middle_name: request.middle_name.as_deref().and_then(normalize_name),
        last_name: request.last_name.as_deref().and_then(normalize_name),
        dates_of_birth: request.date_of_birth.into_iter().collect(),
        national_insurance_number: request
            .national_insurance_number
            .as_deref()
            .and_then(normalize_national_insurance_number),
        reference_number: None,
        reference_number_hint: None,
        email_address: request
            .email_address
            .as_deref()
            .and_then(normalize_email_address),
        gender: request.gender,
    }
}

fn limit_name_tokens(mut tokens: Vec<String>, config: &MatchingConfig) -> Vec<String> {
    if let Some(limit) = config.name_token_limit
        && tokens.len() > limit
    {
        tracing::warn!(
            "Claim carries {} name tokens, only the first {limit} are used",
            tokens.len()
        );
        tokens.truncate(limit);
    }

    tokens
}

impl From<PersonMatch> for MatchSuggestionDTO {
    fn from(value: PersonMatch) -> Self {
        let person = value.person;

        Self {
            person_id: person.id,
            reference_number: person.reference_number,
            first_name: person.first_name,
            middle_name: person.middle_name,
            last_name: person.last_name,
            date_of_birth: person.date_of_birth,
            email_address: person.email_address,
            national_insurance_number: person.national_insurance_number,
            matched_attributes: value.matched_attributes.into(),
        }
    }
}
