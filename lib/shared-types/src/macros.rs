/// Conversions shared by every id wrapping a [`uuid::Uuid`]: parsing from its hyphenated
/// text form, display, and lossless moves in and out of the raw UUID.
macro_rules! uuid_newtype {
    ($id: ident) => {
        impl std::str::FromStr for $id {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                uuid::Uuid::parse_str(s).map(Self)
            }
        }

        impl std::fmt::Display for $id {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0.hyphenated(), f)
            }
        }

        impl std::cmp::PartialEq<uuid::Uuid> for $id {
            fn eq(&self, other: &uuid::Uuid) -> bool {
                self.0 == *other
            }
        }

        impl From<uuid::Uuid> for $id {
            fn from(value: uuid::Uuid) -> Self {
                Self(value)
            }
        }

        impl From<$id> for uuid::Uuid {
            fn from(value: $id) -> Self {
                value.0
            }
        }
    };
}
pub(crate) use uuid_newtype;

/// Lets an id be used as a sea-orm column, including primary and foreign keys.
///
/// The register keeps ids as 36-character hyphenated strings. A stored value that does not
/// parse surfaces as [`sea_orm::DbErr::Type`].
#[cfg(feature = "sea-orm")]
macro_rules! uuid_column {
    ($id: ident) => {
        impl From<$id> for sea_orm::Value {
            fn from(id: $id) -> Self {
                sea_orm::Value::String(Some(Box::new(id.to_string())))
            }
        }

        // column filters take ids by reference
        impl From<&$id> for sea_orm::Value {
            fn from(id: &$id) -> Self {
                (*id).into()
            }
        }

        // find_by_id takes the key by reference
        impl From<&$id> for $id {
            fn from(id: &$id) -> Self {
                *id
            }
        }

        impl sea_orm::TryGetable for $id {
            fn try_get_by<I: sea_orm::ColIdx>(
                res: &sea_orm::QueryResult,
                idx: I,
            ) -> Result<Self, sea_orm::TryGetError> {
                let raw = <String as sea_orm::TryGetable>::try_get_by(res, idx)?;
                raw.parse().map_err(|err| {
                    sea_orm::TryGetError::DbErr(sea_orm::DbErr::Type(format!(
                        "invalid {} `{raw}`: {err}",
                        stringify!($id)
                    )))
                })
            }
        }

        impl sea_orm::sea_query::ValueType for $id {
            fn try_from(v: sea_orm::Value) -> Result<Self, sea_orm::sea_query::ValueTypeErr> {
                <String as sea_orm::sea_query::ValueType>::try_from(v)?
                    .parse()
                    .map_err(|_| sea_orm::sea_query::ValueTypeErr)
            }

            fn type_name() -> String {
                stringify!($id).to_owned()
            }

            fn array_type() -> sea_orm::sea_query::ArrayType {
                sea_orm::sea_query::ArrayType::String
            }

            fn column_type() -> sea_orm::sea_query::ColumnType {
                sea_orm::sea_query::ColumnType::Char(Some(36))
            }
        }

        impl sea_orm::sea_query::Nullable for $id {
            fn null() -> sea_orm::Value {
                sea_orm::Value::String(None)
            }
        }

        impl sea_orm::TryFromU64 for $id {
            fn try_from_u64(_: u64) -> Result<Self, sea_orm::DbErr> {
                Err(sea_orm::DbErr::ConvertFromU64(stringify!($id)))
            }
        }
    };
}
#[cfg(feature = "sea-orm")]
pub(crate) use uuid_column;
