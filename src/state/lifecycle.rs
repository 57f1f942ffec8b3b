//! Generic async-operation lifecycle.
//!
//! DESIGN
//! ======
//! Every remote operation a container tracks moves through the same four
//! phases. A new dispatch overwrites whatever was there before; nothing is
//! queued or deduplicated, so two racing dispatches of the same operation
//! settle in whichever order their responses apply — last applied wins.

use crate::net::types::ApiError;

/// Lifecycle of one fire-and-forget asynchronous operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpState<T> {
    /// Never dispatched (or reset).
    Idle,
    /// Dispatched, response not yet applied. Clears any previous error.
    Pending,
    /// Settled successfully.
    Fulfilled(T),
    /// Settled with a display-ready error message.
    Rejected(String),
}

impl<T> OpState<T> {
    /// Transition to `Pending`, discarding any previous outcome.
    pub fn begin(&mut self) {
        *self = Self::Pending;
    }

    /// Fold an adapter result into the terminal phase. Errors are reduced
    /// to their display message here; callers never see the `ApiError`.
    pub fn settle(&mut self, result: Result<T, ApiError>) {
        *self = match result {
            Ok(value) => Self::Fulfilled(value),
            Err(e) => Self::Rejected(e.user_message()),
        };
    }

    /// Transition to `Rejected` with an already-extracted message.
    pub fn reject(&mut self, message: impl Into<String>) {
        *self = Self::Rejected(message.into());
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    #[must_use]
    pub fn is_fulfilled(&self) -> bool {
        matches!(self, Self::Fulfilled(_))
    }

    #[must_use]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Fulfilled(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Rejected(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> Default for OpState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod tests;
