use derive_more::{Display, FromStr};
use serde::{Deserialize, Serialize};

///
/// Primitive
///
/// Scalar type of a declared field. Persistence fields use it as the
/// storage type, validation fields as the semantic type.
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[remain::sorted]
pub enum Primitive {
    Blob,
    Bool,
    Float,
    Int,
    Text,
    Timestamp,
}

impl Primitive {
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Int | Self::Float)
    }

    // types whose values have a meaningful length
    #[must_use]
    pub const fn supports_len(self) -> bool {
        matches!(self, Self::Blob | Self::Text)
    }
}
