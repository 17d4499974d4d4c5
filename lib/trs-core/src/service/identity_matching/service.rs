use shared_types::PersonId;

use super::IdentityMatchingService;
use super::attribute_matcher::{AttributeMatcher, MatchCriteria};
use super::candidate_finder::CandidateFinder;
use super::dto::{
    DigitalIdentityClaimDTO, DigitalIdentityMatchOutcome, MatchSuggestionDTO,
    MatchedAttributeValueDTO, PersonMatch, RegistrationMatchOutcome, RegistrationRequestDTO,
};
use super::mapper::{criteria_from_digital_identity_claim, criteria_from_registration_request};
use super::name_alias::NameAliasResolver;
use super::policy::{classify_registration_candidate, digital_identity_outcome, registration_outcome};
use super::ranker::rank_person_matches;
use super::validator::{is_digital_identity_claim_matchable, is_registration_request_matchable};
use crate::model::person::Person;
use crate::repository::error::DataLayerError;
use crate::service::error::{EntityNotFoundError, ServiceError};

impl IdentityMatchingService {
    /// Decides whether a verified digital identity belongs to exactly one person on file.
    ///
    /// Returns `NoMatch` without touching the store when the claim carries no name or no date of
    /// birth. Several qualifying persons also yield `NoMatch`.
    pub async fn match_digital_identity(
        &self,
        claim: DigitalIdentityClaimDTO,
    ) -> Result<DigitalIdentityMatchOutcome, ServiceError> {
        let criteria = criteria_from_digital_identity_claim(&claim, &self.config.matching);
        if !is_digital_identity_claim_matchable(&criteria) {
            tracing::debug!("Digital identity claim lacks a name or a date of birth");
            return Ok(DigitalIdentityMatchOutcome::NoMatch);
        }

        let finder = CandidateFinder::new(&*self.person_repository);
        let last_names = criteria.last_name_keys();
        let (aliases, candidates) = futures::try_join!(
            self.load_aliases(&criteria),
            finder.by_last_name_and_date_of_birth(&last_names, &criteria.dates_of_birth),
        )?;

        let outcome = digital_identity_outcome(evaluate(&aliases, &criteria, candidates));
        match &outcome {
            DigitalIdentityMatchOutcome::Match { person_id, .. } => {
                tracing::info!("Digital identity matched person {person_id}");
            }
            DigitalIdentityMatchOutcome::NoMatch => {
                tracing::info!("Digital identity matched no person");
            }
        }

        Ok(outcome)
    }

    /// Ranked shortlist of everyone sharing at least one attribute with a digital identity claim.
    pub async fn get_digital_identity_suggestions(
        &self,
        claim: DigitalIdentityClaimDTO,
    ) -> Result<Vec<MatchSuggestionDTO>, ServiceError> {
        let criteria = criteria_from_digital_identity_claim(&claim, &self.config.matching);

        let finder = CandidateFinder::new(&*self.person_repository);
        let (aliases, candidates) = futures::try_join!(
            self.load_aliases(&criteria),
            finder.digital_identity_suggestion_candidates(&criteria),
        )?;

        Ok(self.suggestions(evaluate(&aliases, &criteria, candidates)))
    }

    /// Matched attributes of a digital identity claim against one known person.
    ///
    /// # Arguments
    ///
    /// * `PersonId` - Id of an existing person
    pub async fn get_matched_attributes(
        &self,
        claim: DigitalIdentityClaimDTO,
        person_id: &PersonId,
    ) -> Result<Vec<MatchedAttributeValueDTO>, ServiceError> {
        let criteria = criteria_from_digital_identity_claim(&claim, &self.config.matching);
        self.matched_attributes_of(&criteria, person_id).await
    }

    /// Decides whether a registration request refers to someone already on file.
    pub async fn match_registration_request(
        &self,
        request: RegistrationRequestDTO,
    ) -> Result<RegistrationMatchOutcome, ServiceError> {
        let criteria = criteria_from_registration_request(&request, &self.config.matching);
        if !is_registration_request_matchable(&criteria) {
            tracing::debug!("Registration request carries no usable attribute");
            return Ok(RegistrationMatchOutcome::NoMatches);
        }

        let finder = CandidateFinder::new(&*self.person_repository);
        let (aliases, candidates) = futures::try_join!(
            self.load_aliases(&criteria),
            finder.registration_candidates(&criteria),
        )?;

        let request_has_national_insurance_number = criteria.national_insurance_number.is_some();
        let classified = evaluate(&aliases, &criteria, candidates)
            .into_iter()
            .map(|candidate| {
                let class = classify_registration_candidate(
                    &candidate.matched_attributes,
                    request_has_national_insurance_number,
                );
                (candidate, class)
            })
            .collect();

        let outcome = registration_outcome(classified);
        match &outcome {
            RegistrationMatchOutcome::DefiniteMatch { person_id } => {
                tracing::info!("Registration request definitely matched person {person_id}");
            }
            RegistrationMatchOutcome::PotentialMatches { person_ids } => {
                tracing::info!(
                    "Registration request potentially matched {} person(s)",
                    person_ids.len()
                );
            }
            RegistrationMatchOutcome::NoMatches => {
                tracing::info!("Registration request matched no person");
            }
        }

        Ok(outcome)
    }

    /// Ranked shortlist of everyone sharing at least one attribute with a registration request.
    pub async fn get_registration_request_suggestions(
        &self,
        request: RegistrationRequestDTO,
    ) -> Result<Vec<MatchSuggestionDTO>, ServiceError> {
        let criteria = criteria_from_registration_request(&request, &self.config.matching);

        let finder = CandidateFinder::new(&*self.person_repository);
        let (aliases, candidates) = futures::try_join!(
            self.load_aliases(&criteria),
            finder.registration_candidates(&criteria),
        )?;

        Ok(self.suggestions(evaluate(&aliases, &criteria, candidates)))
    }

    /// Matched attributes of a registration request against one known person.
    ///
    /// # Arguments
    ///
    /// * `PersonId` - Id of an existing person
    pub async fn get_registration_request_matched_attributes(
        &self,
        request: RegistrationRequestDTO,
        person_id: &PersonId,
    ) -> Result<Vec<MatchedAttributeValueDTO>, ServiceError> {
        let criteria = criteria_from_registration_request(&request, &self.config.matching);
        self.matched_attributes_of(&criteria, person_id).await
    }

    async fn matched_attributes_of(
        &self,
        criteria: &MatchCriteria,
        person_id: &PersonId,
    ) -> Result<Vec<MatchedAttributeValueDTO>, ServiceError> {
        let finder = CandidateFinder::new(&*self.person_repository);
        let (aliases, person) =
            futures::try_join!(self.load_aliases(criteria), finder.by_id(person_id))?;

        let Some(person) = person else {
            return Err(EntityNotFoundError::Person(*person_id).into());
        };

        Ok(AttributeMatcher::new(&aliases)
            .match_person(criteria, &person)
            .into())
    }

    async fn load_aliases(
        &self,
        criteria: &MatchCriteria,
    ) -> Result<NameAliasResolver, DataLayerError> {
        NameAliasResolver::load(&*self.name_synonym_repository, &criteria.first_name_keys()).await
    }

    fn suggestions(&self, candidates: Vec<PersonMatch>) -> Vec<MatchSuggestionDTO> {
        let mut candidates = candidates
            .into_iter()
            .filter(|candidate| !candidate.matched_attributes.is_empty())
            .collect::<Vec<_>>();
        rank_person_matches(&mut candidates);

        if let Some(limit) = self.config.matching.suggestion_limit {
            candidates.truncate(limit);
        }
        tracing::debug!("Returning {} suggestion(s)", candidates.len());

        candidates.into_iter().map(Into::into).collect()
    }
}

fn evaluate(
    aliases: &NameAliasResolver,
    criteria: &MatchCriteria,
    candidates: Vec<Person>,
) -> Vec<PersonMatch> {
    let matcher = AttributeMatcher::new(aliases);
    candidates
        .into_iter()
        .map(|person| matcher.evaluate(criteria, person))
        .collect()
}
