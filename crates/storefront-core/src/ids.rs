//! Newtype IDs for type-safe identifiers.
//!
//! Catalog identifiers are assigned by the external catalog service and are
//! plain integers on the wire. Wrapping them keeps a product id from being
//! passed where a testimonial or blog post id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Macro to generate integer-backed newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// An externally assigned identifier.
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Create an ID from its raw value.
            pub const fn new(id: u32) -> Self {
                Self(id)
            }

            /// Get the raw value.
            pub const fn get(self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse().map(Self)
            }
        }
    };
}

define_id!(ProductId);
define_id!(TestimonialId);
define_id!(PostId);
