//! Error types used by the sorting engine.
//!
//! The engine has no fatal states: every [`SortError`] leaves the orchestrator
//! `Idle`, the sequence untouched (or, for [`SortError::Canceled`], in whatever
//! partially sorted order the run reached) and no completion signal emitted.
//!
//! Errors fall into three groups:
//! - **invalid input**: missing image, non-positive slice count, missing strategy, empty sequence;
//! - **concurrency conflict**: a sort is already in flight;
//! - **cancellation**: the run was stopped through its cancellation token.
//!
//! Like the rest of the crate's diagnostics, the helpers `as_label`/`as_message`
//! are meant for logs.

use thiserror::Error;

/// # Errors produced by the sorting engine.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// No source image was supplied to the slicer.
    #[error("source image is missing")]
    MissingImage,

    /// Slice count must be strictly positive.
    #[error("slice count must be positive, got {count}")]
    InvalidSliceCount {
        /// The rejected count.
        count: i64,
    },

    /// A sort was requested without a strategy.
    #[error("no sort strategy supplied")]
    MissingStrategy,

    /// There is nothing to shuffle or sort (nothing was sliced yet).
    #[error("sequence is empty; slice an image first")]
    EmptySequence,

    /// A sort is already running on this orchestrator.
    #[error("a sort is already running")]
    AlreadyRunning,

    /// The run was cancelled before the strategy finished.
    #[error("sort cancelled")]
    Canceled,
}

impl SortError {
    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use sortvisor::SortError;
    ///
    /// let err = SortError::InvalidSliceCount { count: 0 };
    /// assert_eq!(err.as_label(), "invalid_slice_count");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            SortError::MissingImage => "missing_image",
            SortError::InvalidSliceCount { .. } => "invalid_slice_count",
            SortError::MissingStrategy => "missing_strategy",
            SortError::EmptySequence => "empty_sequence",
            SortError::AlreadyRunning => "already_running",
            SortError::Canceled => "sort_canceled",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            SortError::MissingImage => "source image is missing".to_string(),
            SortError::InvalidSliceCount { count } => format!("invalid slice count: {count}"),
            SortError::MissingStrategy => "strategy is missing".to_string(),
            SortError::EmptySequence => "nothing to shuffle or sort".to_string(),
            SortError::AlreadyRunning => "sort in progress; request ignored".to_string(),
            SortError::Canceled => "sort cancelled".to_string(),
        }
    }

    /// Indicates whether the error was caused by bad caller input.
    ///
    /// # Example
    /// ```
    /// use sortvisor::SortError;
    ///
    /// assert!(SortError::MissingStrategy.is_invalid_input());
    /// assert!(!SortError::AlreadyRunning.is_invalid_input());
    /// ```
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            SortError::MissingImage
                | SortError::InvalidSliceCount { .. }
                | SortError::MissingStrategy
                | SortError::EmptySequence
        )
    }

    /// Indicates whether the request collided with a run in flight.
    pub fn is_conflict(&self) -> bool {
        matches!(self, SortError::AlreadyRunning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_stable() {
        assert_eq!(SortError::MissingImage.as_label(), "missing_image");
        assert_eq!(SortError::Canceled.as_label(), "sort_canceled");
        assert_eq!(SortError::AlreadyRunning.as_label(), "already_running");
    }

    #[test]
    fn test_grouping() {
        assert!(SortError::EmptySequence.is_invalid_input());
        assert!(SortError::InvalidSliceCount { count: -3 }.is_invalid_input());
        assert!(!SortError::Canceled.is_invalid_input());
        assert!(SortError::AlreadyRunning.is_conflict());
        assert!(!SortError::MissingImage.is_conflict());
    }

    #[test]
    fn test_display_includes_count() {
        let err = SortError::InvalidSliceCount { count: -1 };
        assert_eq!(err.to_string(), "slice count must be positive, got -1");
        assert_eq!(err.as_message(), "invalid slice count: -1");
    }
}
