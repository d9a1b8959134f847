//! Construction parameters for `SimpleHashMap`

use crate::MapError;

/// Number of slots a map starts with when no capacity is given
pub const DEFAULT_INITIAL_CAPACITY: isize = 16;

/// Fill ratio at which a map doubles its capacity when none is given
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;

/// Initial capacity and growth threshold of a map.
///
/// The capacity is signed so that a caller passing a negative number gets an
/// `InvalidArgument` back instead of a silently wrapped value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapConfig {
    /// Number of slots allocated at construction
    pub initial_capacity: isize,
    /// Growth threshold, must lie in `(0, 1]`
    pub load_factor: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self { initial_capacity: DEFAULT_INITIAL_CAPACITY, load_factor: DEFAULT_LOAD_FACTOR }
    }
}

impl MapConfig {
    /// Creates a configuration from explicit values. Nothing is checked until `validate`.
    #[must_use]
    pub const fn new(initial_capacity: isize, load_factor: f64) -> Self {
        Self { initial_capacity, load_factor }
    }

    /// Replaces the initial capacity
    #[must_use]
    pub const fn with_initial_capacity(mut self, initial_capacity: isize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Replaces the load factor
    #[must_use]
    pub const fn with_load_factor(mut self, load_factor: f64) -> Self {
        self.load_factor = load_factor;
        self
    }

    /// Checks both parameters and returns the capacity as a slot count.
    ///
    /// # Errors
    ///
    /// `MapError::InvalidArgument` when the capacity is not positive or the
    /// load factor is outside `(0, 1]` (NaN included).
    pub fn validate(&self) -> Result<usize, MapError> {
        let capacity = usize::try_from(self.initial_capacity)
            .ok()
            .filter(|&capacity| capacity > 0)
            .ok_or_else(|| {
                MapError::InvalidArgument(format!(
                    "initial capacity must be greater than 0, got {}",
                    self.initial_capacity
                ))
            })?;

        if !(self.load_factor > 0.0 && self.load_factor <= 1.0) {
            return Err(MapError::InvalidArgument(format!(
                "load factor must be greater than 0 and at most 1, got {}",
                self.load_factor
            )));
        }

        Ok(capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = MapConfig::default();
        assert_eq!(config.initial_capacity, 16);
        assert!((config.load_factor - 0.75).abs() < f64::EPSILON);
        assert_eq!(config.validate(), Ok(16));
    }

    #[test]
    fn test_rejects_non_positive_capacity() {
        for capacity in [0, -5, isize::MIN] {
            let result = MapConfig::default().with_initial_capacity(capacity).validate();
            assert!(matches!(result, Err(MapError::InvalidArgument(_))), "capacity {capacity}");
        }
    }

    #[test]
    fn test_load_factor_bounds() {
        for load_factor in [0.0, -0.5, 1.5, f64::NAN, f64::INFINITY] {
            let result = MapConfig::default().with_load_factor(load_factor).validate();
            assert!(matches!(result, Err(MapError::InvalidArgument(_))), "load factor {load_factor}");
        }

        assert_eq!(MapConfig::new(8, 1.0).validate(), Ok(8));
        assert_eq!(MapConfig::new(1, f64::MIN_POSITIVE).validate(), Ok(1));
    }
}
