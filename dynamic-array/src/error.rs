use thiserror::Error;

/// Errors returned by [`DynamicArray`](crate::DynamicArray) operations.
///
/// Every variant is raised before the container is touched, so a failed call
/// leaves length, capacity and element placement exactly as they were.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DynamicArrayError {
    /// The index lies outside the legal range for the operation: `[0, len]`
    /// for insertion, `[0, len)` for access and removal.
    #[error("index {index} is out of bounds for length {len}")]
    OutOfBounds { index: usize, len: usize },

    /// An absent value was supplied where a real value is required.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Doubling the backing store would overflow `usize`.
    #[error("cannot grow backing store past capacity {capacity}")]
    CapacityOverflow { capacity: usize },
}

/// Convenience alias used throughout the crate so functions can simply return
/// `Result<T>` instead of writing out the full type every time.
pub type Result<T> = core::result::Result<T, DynamicArrayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            DynamicArrayError::OutOfBounds { index: 4, len: 2 }.to_string(),
            "index 4 is out of bounds for length 2"
        );
        assert_eq!(
            DynamicArrayError::InvalidArgument("cannot insert an absent value").to_string(),
            "invalid argument: cannot insert an absent value"
        );
        assert_eq!(
            DynamicArrayError::CapacityOverflow { capacity: 9 }.to_string(),
            "cannot grow backing store past capacity 9"
        );
    }
}
