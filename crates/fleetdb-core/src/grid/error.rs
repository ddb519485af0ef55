use crate::{
    error::InternalError,
    grid::{filter::FilterModelError, path::PathError},
};
use thiserror::Error as ThisError;

///
/// GridError
///
/// Composite error surface of the grid engine. `Path` and `Filter` are
/// client-input classes raised from translation, before any query phase
/// executes; `Internal` is a server fault passed through untouched.
///

#[derive(Debug, ThisError)]
pub enum GridError {
    #[error("{0}")]
    Path(#[from] PathError),

    #[error("{0}")]
    Filter(#[from] FilterModelError),

    #[error("{0}")]
    Internal(#[from] InternalError),
}

impl GridError {
    /// True for errors the caller should map to a client-input rejection.
    #[must_use]
    pub const fn is_client_input(&self) -> bool {
        matches!(self, Self::Path(_) | Self::Filter(_))
    }
}
