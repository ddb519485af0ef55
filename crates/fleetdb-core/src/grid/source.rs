use crate::{traits::EntityValue, types::Id, value::Value};

///
/// GridSource
///
/// Storage port consumed by the grid engine. One implementation per root
/// entity, typically on the aggregate database.
///
/// `Row` is the hydrated page row: the entity plus its declared default
/// associations, fetched eagerly so a page costs at most two storage
/// round trips regardless of page size or association depth.
///

pub trait GridSource<E: EntityValue> {
    type Row;

    /// Ordered scan of candidate rows for the id phase.
    fn scan(&self) -> impl Iterator<Item = &E>;

    /// Single batch fetch of hydrated rows for exactly these identities.
    /// No order guarantee; identities that no longer resolve are skipped.
    fn fetch_rows(&self, ids: &[Id<E>]) -> Vec<Self::Row>;

    /// Identity of a hydrated row, for rank-map reordering.
    fn row_id(row: &Self::Row) -> Id<E>;

    /// Value of `field` on the association row reached from `row` through
    /// the dotted `join` prefix. `Value::Null` when any hop is absent —
    /// outer-join semantics, the row itself is never eliminated.
    fn association_value(&self, row: &E, join: &str, field: &str) -> Value;
}
