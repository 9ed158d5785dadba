//! Fetch State
//!
//! Render state of a single request: in flight, resolved, or failed.

use crate::error::{FetchError, FetchResult};

/// Loading / Ready / Failed state held by a widget or panel
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Ready(T),
    Failed(FetchError),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Loading
    }
}

impl<T> From<FetchResult<T>> for FetchState<T> {
    fn from(result: FetchResult<T>) -> Self {
        match result {
            Ok(value) => FetchState::Ready(value),
            Err(err) => FetchState::Failed(err),
        }
    }
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            FetchState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            FetchState::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Map the ready value, keeping Loading and Failed as they are
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchState<U> {
        match self {
            FetchState::Loading => FetchState::Loading,
            FetchState::Ready(value) => FetchState::Ready(f(value)),
            FetchState::Failed(err) => FetchState::Failed(err),
        }
    }
}
