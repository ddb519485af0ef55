use crate::grid::{filter::FilterModel, sort::SortModel};
use serde::{Deserialize, Serialize};

///
/// PageWindow
///
/// Normalized offset/limit window. The grid contract is a zero-based start
/// row and an exclusive end row; degenerate input clamps to offset ≥ 0 and
/// page size ≥ 1.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PageWindow {
    pub offset: usize,
    pub limit: usize,
}

impl PageWindow {
    /// Build a window from grid row bounds.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub const fn from_rows(start_row: i64, end_row: i64) -> Self {
        let offset = if start_row > 0 { start_row as usize } else { 0 };
        let size = end_row.saturating_sub(start_row);
        let limit = if size > 1 { size as usize } else { 1 };

        Self { offset, limit }
    }

    /// Apply the configured page-size ceiling.
    #[must_use]
    pub(crate) fn clamped(self, max_page_rows: u32) -> Self {
        Self {
            offset: self.offset,
            limit: self.limit.min(max_page_rows as usize),
        }
    }
}

///
/// GridRequest
///
/// One grid query as decoded from the UI contract.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridRequest {
    pub filter_model: FilterModel,
    pub sort_model: SortModel,
    pub start_row: i64,
    pub end_row: i64,
}

impl GridRequest {
    #[must_use]
    pub const fn window(&self) -> PageWindow {
        PageWindow::from_rows(self.start_row, self.end_row)
    }
}

///
/// GridResponse
///

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridResponse<R> {
    pub rows: Vec<R>,
    pub total_count: u64,
}
