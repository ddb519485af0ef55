use crate::DEFAULT_MAX_PAGE_ROWS;
use serde::{Deserialize, Serialize};

///
/// GridConfig
///
/// Runtime limits for grid execution. Request-independent; one instance is
/// shared by every executor built against the same database.
///

#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct GridConfig {
    /// Ceiling on one page's id window; requests beyond it are clamped.
    pub max_page_rows: u32,
    /// Emit plain-line execution logging from executors.
    pub debug: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            max_page_rows: DEFAULT_MAX_PAGE_ROWS,
            debug: false,
        }
    }
}
