/// One directed row of the first-name synonym relation.
///
/// The store holds both directions as separate rows, e.g. `(bill, william)` and `(william, bill)`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct NameSynonym {
    pub name: String,
    pub synonym: String,
}
