use crate::{
    model::EntityModel,
    types::{Decimal, Float32, Float64, Id, Timestamp},
    value::Value,
};
use serde::{Serialize, de::DeserializeOwned};
use std::fmt::Debug;

///
/// Path
/// Fully-qualified schema path.
///

pub trait Path {
    const PATH: &'static str;
}

///
/// EntityKind
///
/// A schema-described entity type. The static model is the only schema
/// surface the engine consults at query-build time.
///

pub trait EntityKind: Path + Sized + 'static {
    const MODEL: &'static EntityModel;
}

///
/// EntityValue
///
/// A concrete entity row: typed identity plus by-name scalar field reads.
/// `field_value` returns `None` for unknown names and `Value::Null` for
/// absent optional fields — the two cases are deliberately distinct.
///

pub trait EntityValue: EntityKind + Clone + Debug + Serialize + DeserializeOwned {
    fn id(&self) -> Id<Self>;

    fn field_value(&self, field: &str) -> Option<Value>;
}

///
/// EnumValue
///
/// Wire-name round-trip for symbolic enumeration fields. Names match the
/// variant allow-list declared in the entity model.
///

pub trait EnumValue: Sized {
    fn as_name(&self) -> &'static str;

    fn from_name(name: &str) -> Option<Self>;
}

///
/// FieldValue
///
/// Conversion boundary for values read out of entity fields.
///

pub trait FieldValue {
    fn to_value(&self) -> Value;
}

impl FieldValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl FieldValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl FieldValue for Decimal {
    fn to_value(&self) -> Value {
        Value::Decimal(*self)
    }
}

impl FieldValue for Float32 {
    fn to_value(&self) -> Value {
        Value::Float32(*self)
    }
}

impl FieldValue for Float64 {
    fn to_value(&self) -> Value {
        Value::Float64(*self)
    }
}

impl FieldValue for Timestamp {
    fn to_value(&self) -> Value {
        Value::Timestamp(*self)
    }
}

impl<E> FieldValue for Id<E> {
    fn to_value(&self) -> Value {
        self.as_value()
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }
}

// impl_int_field_value
macro_rules! impl_int_field_value {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl FieldValue for $type {
                fn to_value(&self) -> Value {
                    Value::$variant((*self).into())
                }
            }
        )*
    };
}

impl_int_field_value!(
    i8 => Int,
    i16 => Int,
    i32 => Int,
    i64 => Int,
    u8 => Uint,
    u16 => Uint,
    u32 => Uint,
    u64 => Uint,
);

///
/// impl_enum_value
///
/// Implements `EnumValue` + `FieldValue` for a fieldless enum, plus the
/// `VARIANT_NAMES` slice referenced by the entity model's `Enum` kind.
///

#[macro_export]
macro_rules! impl_enum_value {
    ( $type:ty { $( $variant:ident => $name:literal ),* $(,)? } ) => {
        impl $type {
            pub const VARIANT_NAMES: &'static [&'static str] = &[ $( $name ),* ];
        }

        impl $crate::traits::EnumValue for $type {
            fn as_name(&self) -> &'static str {
                match self {
                    $( Self::$variant => $name, )*
                }
            }

            fn from_name(name: &str) -> Option<Self> {
                match name {
                    $( $name => Some(Self::$variant), )*
                    _ => None,
                }
            }
        }

        impl $crate::traits::FieldValue for $type {
            fn to_value(&self) -> $crate::value::Value {
                $crate::value::Value::Enum(
                    $crate::traits::EnumValue::as_name(self).to_string(),
                )
            }
        }
    };
}
