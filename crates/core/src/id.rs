//! Strongly-typed identifiers used across the domain.
//!
//! Identifiers here are human-inspectable strings (`AB0042`, `O00002A`), not
//! UUIDs: they are derived deterministically from generation indices and end up
//! verbatim in the output records.

use serde::{Deserialize, Serialize};

/// Stock-keeping unit: unique key of an inventory item.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sku(String);

/// Identifier of a generated order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

macro_rules! impl_string_newtype {
    ($t:ty) => {
        impl $t {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl core::borrow::Borrow<str> for $t {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

impl_string_newtype!(Sku);
impl_string_newtype!(OrderId);

impl Sku {
    /// Catalog SKU: category code followed by the in-bucket index, zero-padded
    /// to at least four digits (`AB0007`, `AB12345`).
    pub fn from_parts(category: &str, index_in_bucket: usize) -> Self {
        Self(format!("{category}{index_in_bucket:04}"))
    }
}

impl OrderId {
    /// Order identifier derived from the generation index (`O00001F`).
    pub fn from_index(index: u64) -> Self {
        Self(format!("O{index:06X}"))
    }
}
