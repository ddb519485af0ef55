///
/// EntityFieldModel
/// Runtime field metadata used by translation and validation.
///

#[derive(Debug)]
pub struct EntityFieldModel {
    /// Field name as used in column identifiers.
    pub name: &'static str,
    /// Declared type shape.
    pub kind: EntityFieldKind,
}

///
/// EntityFieldKind
///
/// Per-column type descriptor. Filter operands are coerced to this declared
/// representation at translation time; this is the only type information the
/// engine consults.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntityFieldKind {
    Bool,
    Int,
    Uint,
    Float32,
    Float64,
    Decimal,
    Text,
    Enum {
        /// Declared wire names, used for symbolic set-filter lookup.
        variants: &'static [&'static str],
    },
    Timestamp,
}

impl EntityFieldKind {
    /// Date filters apply to timestamp columns only.
    #[must_use]
    pub const fn is_timestamp(&self) -> bool {
        matches!(self, Self::Timestamp)
    }

    /// Number filters apply to these kinds only.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::Int | Self::Uint | Self::Float32 | Self::Float64 | Self::Decimal
        )
    }

    /// Diagnostic label for error messages.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Uint => "uint",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Decimal => "decimal",
            Self::Text => "text",
            Self::Enum { .. } => "enum",
            Self::Timestamp => "timestamp",
        }
    }
}
