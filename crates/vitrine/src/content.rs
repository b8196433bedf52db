//! The process-wide content cell.
//!
//! A single string, initialised to [`DEFAULT_CONTENT`] on first access and alive for the rest of
//! the process. It is not connected to the content value held by the collection provider or a
//! [`CollectionStore`](crate::store::CollectionStore); the two only share an initial value.
//!
//! Code that wants its own cell with an explicit lifetime can construct a [`ContentCell`]
//! and pass it around instead of going through [`get_content`] / [`set_content`].

use std::sync::{LazyLock, PoisonError, RwLock};

/// Initial value of every content cell and of the collection state.
pub const DEFAULT_CONTENT: &str = "collection";

static GLOBAL_CONTENT: LazyLock<ContentCell> = LazyLock::new(ContentCell::new);

/// A string slot with read, write and reset.
///
/// Writes replace the value wholesale. Readers get an owned copy, so a value read before a
/// write is not updated afterwards.
#[derive(Debug)]
pub struct ContentCell {
    value: RwLock<String>,
}

impl ContentCell {
    /// Creates a cell holding [`DEFAULT_CONTENT`].
    pub fn new() -> Self {
        Self::with_value(DEFAULT_CONTENT)
    }

    /// Creates a cell holding `value`.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: RwLock::new(value.into()),
        }
    }

    /// Returns a copy of the current value.
    pub fn get(&self) -> String {
        // A writer that panicked mid-assignment still leaves a valid String behind.
        self.value
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replaces the current value.
    pub fn set(&self, value: impl Into<String>) {
        *self.value.write().unwrap_or_else(PoisonError::into_inner) = value.into();
    }

    /// Puts the cell back to [`DEFAULT_CONTENT`].
    pub fn reset(&self) {
        self.set(DEFAULT_CONTENT);
    }
}

impl Default for ContentCell {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the current value of the process-wide content cell.
pub fn get_content() -> String {
    GLOBAL_CONTENT.get()
}

/// Replaces the value of the process-wide content cell.
pub fn set_content(value: impl Into<String>) {
    let value = value.into();
    tracing::trace!(len = value.len(), "global content replaced");
    GLOBAL_CONTENT.set(value);
}

/// Puts the process-wide content cell back to [`DEFAULT_CONTENT`].
pub fn reset_content() {
    GLOBAL_CONTENT.reset();
}
