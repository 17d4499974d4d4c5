use std::cmp::Ordering;

use super::dto::{MatchedAttribute, PersonMatch};

/// Total order over candidates, strongest evidence first.
///
/// A matched reference number outranks everything else, then a matched NINO, then the number of
/// matched categories. Ties fall back to the person id so the order never depends on retrieval
/// order.
pub fn compare_person_matches(a: &PersonMatch, b: &PersonMatch) -> Ordering {
    let has = |candidate: &PersonMatch, attribute| candidate.matched_attributes.contains(attribute);

    has(b, MatchedAttribute::ReferenceNumber)
        .cmp(&has(a, MatchedAttribute::ReferenceNumber))
        .then_with(|| {
            has(b, MatchedAttribute::NationalInsuranceNumber)
                .cmp(&has(a, MatchedAttribute::NationalInsuranceNumber))
        })
        .then_with(|| {
            b.matched_attributes
                .matched_count()
                .cmp(&a.matched_attributes.matched_count())
        })
        .then_with(|| a.person.id.cmp(&b.person.id))
}

pub fn rank_person_matches(matches: &mut [PersonMatch]) {
    matches.sort_by(compare_person_matches);
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::service::identity_matching::dto::MatchedAttributes;
    use crate::service::test_utilities::dummy_person_with_id;

    fn candidate(id: u128, attributes: &[MatchedAttribute]) -> PersonMatch {
        PersonMatch {
            person: dummy_person_with_id(id),
            matched_attributes: attributes
                .iter()
                .map(|attribute| (*attribute, "value"))
                .collect::<MatchedAttributes>(),
        }
    }

    fn ids(matches: &[PersonMatch]) -> Vec<u128> {
        matches
            .iter()
            .map(|candidate| uuid::Uuid::from(candidate.person.id).as_u128())
            .collect()
    }

    #[test]
    fn test_identifiers_rank_before_count() {
        use MatchedAttribute::*;

        let mut matches = vec![
            candidate(1, &[LastName, DateOfBirth]),
            candidate(2, &[ReferenceNumber]),
            candidate(3, &[NationalInsuranceNumber]),
            candidate(4, &[LastName, DateOfBirth, ReferenceNumber]),
        ];

        rank_person_matches(&mut matches);

        assert_eq!(ids(&matches), vec![4, 2, 3, 1]);
    }

    #[test]
    fn test_count_orders_within_identifier_tier() {
        use MatchedAttribute::*;

        let mut matches = vec![
            candidate(1, &[NationalInsuranceNumber]),
            candidate(2, &[NationalInsuranceNumber, DateOfBirth, EmailAddress]),
        ];

        rank_person_matches(&mut matches);

        assert_eq!(ids(&matches), vec![2, 1]);
    }

    #[test]
    fn test_gender_does_not_count() {
        use MatchedAttribute::*;

        let mut matches = vec![
            candidate(1, &[LastName, Gender]),
            candidate(2, &[LastName, DateOfBirth]),
        ];

        rank_person_matches(&mut matches);

        assert_eq!(ids(&matches), vec![2, 1]);
    }

    #[test]
    fn test_ties_break_on_person_id() {
        use MatchedAttribute::*;

        let mut forward = vec![
            candidate(2, &[LastName, DateOfBirth]),
            candidate(1, &[FirstName, LastName]),
        ];
        let mut backward = forward.iter().rev().cloned().collect::<Vec<_>>();

        rank_person_matches(&mut forward);
        rank_person_matches(&mut backward);

        assert_eq!(ids(&forward), vec![1, 2]);
        assert_eq!(forward, backward);
    }
}
