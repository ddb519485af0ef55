use derive_more::Display;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as DeError};
use std::{cmp::Ordering, hash::Hash, hash::Hasher};

// Finite, totally-ordered float newtypes. `Value` requires `Eq + Ord`, so
// non-finite payloads are rejected at construction and ordering delegates
// to `total_cmp`.

macro_rules! ordered_float {
    ($name:ident, $prim:ty) => {
        #[derive(Clone, Copy, Debug, Default, Display)]
        #[repr(transparent)]
        pub struct $name($prim);

        impl $name {
            pub const ZERO: Self = Self(0.0);

            /// Construct from a primitive float; non-finite input is rejected.
            #[must_use]
            pub fn try_new(value: $prim) -> Option<Self> {
                value.is_finite().then_some(Self(value))
            }

            /// The wrapped primitive value.
            #[must_use]
            pub const fn get(self) -> $prim {
                self.0
            }
        }

        impl Eq for $name {}

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.0.total_cmp(&other.0) == Ordering::Equal
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> Ordering {
                self.0.total_cmp(&other.0)
            }
        }

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Hash for $name {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.0.to_bits().hash(state);
            }
        }

        impl From<$name> for $prim {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                self.0.serialize(serializer)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = <$prim>::deserialize(deserializer)?;

                Self::try_new(value).ok_or_else(|| {
                    D::Error::custom(concat!(stringify!($name), " must be finite"))
                })
            }
        }
    };
}

ordered_float!(Float32, f32);
ordered_float!(Float64, f64);
