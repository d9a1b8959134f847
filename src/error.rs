//! Errors reported by `SimpleHashMap` and its configuration

use thiserror::Error;

/// The two ways a map operation can be refused
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// A construction parameter is out of range
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// `put`, `get` or `probe_distance` was called without a key
    #[error("null is not allowed to be used as a key")]
    NullKey,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = MapError::InvalidArgument("initial capacity must be greater than 0, got 0".into());
        assert_eq!(err.to_string(), "invalid argument: initial capacity must be greater than 0, got 0");
        assert_eq!(MapError::NullKey.to_string(), "null is not allowed to be used as a key");
    }
}
