use core::panic::Location;

use thiserror::Error;

pub type Result<T> = core::result::Result<T, DynArrayError>;

/// Error types for `DynamicArray` operations
///
/// Every fallible operation leaves the array (and any output argument)
/// exactly as it was before the call when it returns one of these.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum DynArrayError {
    /// Index is beyond the range the operation accepts
    #[error("Index out of bounds: index {index} is beyond array length {length}")]
    IndexOutOfBounds {
        /// Index that was requested
        index: usize,
        /// Length of the array at the time of the call
        length: usize,
    },
    /// Shift requested with a zero position count
    #[error("Invalid shift: cannot shift elements by {count} positions")]
    InvalidShift {
        /// Requested number of positions
        count: usize,
    },
    /// Caller-provided output buffer cannot hold the result
    #[error("Output too small: {required} slots required, but only {provided} provided")]
    OutputTooSmall {
        /// Number of slots the operation writes
        required: usize,
        /// Number of slots in the output buffer
        provided: usize,
    },
    /// The allocator could not satisfy the requested capacity
    #[error("Allocation failure: cannot allocate {requested} element slots")]
    AllocationFailure {
        /// Capacity in elements that was requested
        requested: usize,
    },
    /// Invalid growth policy parameter
    #[error("Invalid configuration: {parameter} {reason}")]
    InvalidConfiguration {
        /// Name of the offending parameter
        parameter: &'static str,
        /// Description of the constraint that was violated
        reason: &'static str,
    },
}

impl DynArrayError {
    /// Emits the diagnostic event for a rejected operation and hands the
    /// error back, so call sites can write `Err(err.reported("erase"))`.
    ///
    /// The event's `file` and `line` fields name the code that called the
    /// failing public method. Every function between that method and this
    /// one must be `#[track_caller]` for the location to propagate.
    #[track_caller]
    pub(crate) fn reported(self, operation: &'static str) -> Self {
        let caller = Location::caller();
        let (file, line) = (caller.file(), caller.line());
        match &self {
            DynArrayError::AllocationFailure { requested } => {
                tracing::error!(
                    operation,
                    requested,
                    file,
                    line,
                    "dynamic array allocation failed"
                );
            }
            _ => tracing::warn!(
                operation,
                error = %self,
                file,
                line,
                "dynamic array operation rejected"
            ),
        }
        self
    }
}
