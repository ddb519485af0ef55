use crate::model::{association::AssociationModel, field::EntityFieldModel};

///
/// EntityModel
/// Static runtime model for one entity.
///
/// This is the schema-registration surface: per-column type descriptors,
/// the to-one association allow-list, and the entity's default order are
/// all resolved here, never by runtime type inspection.
///

#[derive(Debug)]
pub struct EntityModel {
    /// Fully-qualified Rust type path (for dispatch and diagnostics).
    pub path: &'static str,
    /// Stable external name used in keys and diagnostics.
    pub entity_name: &'static str,
    /// Primary key field (must name an entry in `fields`).
    pub primary_key: &'static str,
    /// Ordered field list (authoritative for translation and validation).
    pub fields: &'static [EntityFieldModel],
    /// Declared to-one associations reachable from grid column paths.
    pub associations: &'static [AssociationModel],
    /// Order applied when a grid request carries no sort model.
    pub default_order: &'static [(&'static str, OrderDirection)],
}

impl EntityModel {
    /// Look up a scalar field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static EntityFieldModel> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Look up a declared association by name.
    #[must_use]
    pub fn association(&self, name: &str) -> Option<&'static AssociationModel> {
        self.associations.iter().find(|a| a.name == name)
    }

    /// The primary-key field model, when the declaration is well-formed.
    #[must_use]
    pub fn primary_key_field(&self) -> Option<&'static EntityFieldModel> {
        self.field(self.primary_key)
    }
}

///
/// OrderDirection
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum OrderDirection {
    #[default]
    Asc,
    Desc,
}

impl OrderDirection {
    /// Parse a wire direction; anything but a case-insensitive `desc`
    /// defaults to ascending.
    #[must_use]
    pub fn parse(direction: &str) -> Self {
        if direction.eq_ignore_ascii_case("desc") {
            Self::Desc
        } else {
            Self::Asc
        }
    }
}
