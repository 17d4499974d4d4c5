//! Decision rules of the two matching flows.

use itertools::Itertools;

use super::dto::{
    DigitalIdentityMatchOutcome, MatchedAttribute, MatchedAttributes, PersonMatch,
    RegistrationMatchOutcome,
};
use super::ranker::rank_person_matches;

/// Name and date of birth agree with the claim.
pub fn is_digital_identity_candidate(matched: &MatchedAttributes) -> bool {
    matched.contains(MatchedAttribute::FirstName)
        && matched.contains(MatchedAttribute::LastName)
        && matched.contains(MatchedAttribute::DateOfBirth)
}

/// A candidate additionally corroborated by a NINO or a reference number.
pub fn is_digital_identity_qualified(matched: &MatchedAttributes) -> bool {
    is_digital_identity_candidate(matched)
        && (matched.contains(MatchedAttribute::NationalInsuranceNumber)
            || matched.contains(MatchedAttribute::ReferenceNumber))
}

/// Only a single qualified candidate is ever linked automatically.
pub fn digital_identity_outcome(candidates: Vec<PersonMatch>) -> DigitalIdentityMatchOutcome {
    let mut qualified = candidates
        .into_iter()
        .filter(|candidate| is_digital_identity_qualified(&candidate.matched_attributes))
        .collect::<Vec<_>>();

    match qualified.len() {
        0 => DigitalIdentityMatchOutcome::NoMatch,
        1 => {
            let PersonMatch {
                person,
                matched_attributes,
            } = qualified.remove(0);

            DigitalIdentityMatchOutcome::Match {
                person_id: person.id,
                reference_number: person.reference_number,
                matched_attributes: matched_attributes.into(),
            }
        }
        count => {
            tracing::warn!(
                "{count} persons qualify for one digital identity, ids: {}",
                qualified
                    .iter()
                    .map(|candidate| candidate.person.id)
                    .sorted()
                    .join(", ")
            );
            DigitalIdentityMatchOutcome::NoMatch
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RegistrationCandidateClass {
    Definite,
    Potential,
    None,
}

pub fn classify_registration_candidate(
    matched: &MatchedAttributes,
    request_has_national_insurance_number: bool,
) -> RegistrationCandidateClass {
    use MatchedAttribute::*;

    let date_of_birth = matched.contains(DateOfBirth);
    let national_insurance_number = matched.contains(NationalInsuranceNumber);
    let email_address = matched.contains(EmailAddress);

    if date_of_birth && national_insurance_number {
        return RegistrationCandidateClass::Definite;
    }

    if !request_has_national_insurance_number
        && [FirstName, LastName, DateOfBirth, EmailAddress, Gender]
            .into_iter()
            .all(|attribute| matched.contains(attribute))
    {
        return RegistrationCandidateClass::Definite;
    }

    if matched.matched_count() >= 3 || email_address || national_insurance_number {
        return RegistrationCandidateClass::Potential;
    }

    RegistrationCandidateClass::None
}

/// Several definite candidates are escalated to review like potential ones.
pub fn registration_outcome(
    candidates: Vec<(PersonMatch, RegistrationCandidateClass)>,
) -> RegistrationMatchOutcome {
    let candidates = candidates
        .into_iter()
        .filter(|(_, class)| *class != RegistrationCandidateClass::None)
        .collect::<Vec<_>>();

    let definite = candidates
        .iter()
        .filter(|(_, class)| *class == RegistrationCandidateClass::Definite)
        .map(|(candidate, _)| candidate.person.id)
        .collect::<Vec<_>>();

    if let [person_id] = definite[..] {
        return RegistrationMatchOutcome::DefiniteMatch { person_id };
    }

    if definite.len() > 1 {
        tracing::warn!(
            "{} persons definitely match one registration request, escalating",
            definite.len()
        );
    }

    if candidates.is_empty() {
        return RegistrationMatchOutcome::NoMatches;
    }

    let mut candidates = candidates
        .into_iter()
        .map(|(candidate, _)| candidate)
        .collect::<Vec<_>>();
    rank_person_matches(&mut candidates);

    RegistrationMatchOutcome::PotentialMatches {
        person_ids: candidates
            .into_iter()
            .map(|candidate| candidate.person.id)
            .collect(),
    }
}
