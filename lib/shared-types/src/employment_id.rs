use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::macros::uuid_newtype;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct EmploymentId(Uuid);

uuid_newtype!(EmploymentId);

#[cfg(feature = "sea-orm")]
crate::macros::uuid_column!(EmploymentId);
