use serde::{Deserialize, Serialize};

pub use crate::model::OrderDirection;

///
/// SortModel
///
/// Ordered sequence of sort descriptors; an empty model selects the
/// entity's declared default order.
///

pub type SortModel = Vec<SortInput>;

///
/// SortInput
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SortInput {
    /// Column identifier, dotted paths included.
    pub col_id: String,
    /// `asc` or `desc`, case-insensitive; anything else means `asc`.
    pub sort: Option<String>,
}

impl SortInput {
    #[must_use]
    pub fn direction(&self) -> OrderDirection {
        self.sort
            .as_deref()
            .map_or(OrderDirection::Asc, OrderDirection::parse)
    }
}
