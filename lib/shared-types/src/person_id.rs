use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::macros::uuid_newtype;

/// Identifier of a person record in the register.
///
/// Ordered by the underlying UUID bytes, which gives suggestion lists a stable final sort key.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct PersonId(Uuid);

uuid_newtype!(PersonId);

#[cfg(feature = "sea-orm")]
crate::macros::uuid_column!(PersonId);
