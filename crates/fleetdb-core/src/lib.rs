//! Core runtime for FleetDB: entity traits, values, the schema model, the
//! in-memory store, and the grid query engine exported via the `prelude`.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod config;
pub mod error;
pub mod grid;
pub mod model;
pub mod obs;
pub mod store;
pub mod traits;
pub mod types;
pub mod value;

#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// CONSTANTS
///

/// Default ceiling for one grid page's id window.
///
/// This bounds the id-phase window so a hostile `endRow` cannot request an
/// unbounded hydration batch. Overridable via `GridConfig`.
pub const DEFAULT_MAX_PAGE_ROWS: u32 = 10_000;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, executors, stores, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        model::{AssociationModel, EntityFieldKind, EntityFieldModel, EntityModel},
        traits::{EntityKind, EntityValue, Path},
        types::{Id, Timestamp},
        value::Value,
    };
}
