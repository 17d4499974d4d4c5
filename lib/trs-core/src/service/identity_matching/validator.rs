use super::attribute_matcher::MatchCriteria;

/// A digital identity claim is only matched with at least one name and one date of birth.
pub(super) fn is_digital_identity_claim_matchable(criteria: &MatchCriteria) -> bool {
    !criteria.name_tokens.is_empty() && !criteria.dates_of_birth.is_empty()
}

/// A registration request carrying no usable attribute cannot match anyone.
pub(super) fn is_registration_request_matchable(criteria: &MatchCriteria) -> bool {
    !criteria.is_empty()
}
