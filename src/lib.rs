//! # Simple Hash Map
//!
//! An integer-keyed hash map built on open addressing with linear probing.
//!
//! `SimpleHashMap` stores `i32` keys and `i64` values directly in a single slot
//! vector. Colliding keys move forward to the next free slot, wrapping around at
//! the end of the vector. Once the number of entries reaches
//! `load_factor * capacity` the next insertion first doubles the capacity and
//! rehashes every entry.
//!
//! The map only grows: there is no removal, iteration or shrinking.
//!
//! ## Basic Usage
//!
//! ```rust
//! use simplehashmap::{MapError, SimpleHashMap};
//!
//! // Create a map with 16 slots and a load factor of 0.75
//! let mut map = SimpleHashMap::new();
//!
//! // Insert values
//! map.put(1, 100)?;
//! map.put(2, 200)?;
//!
//! // Retrieve values
//! assert_eq!(map.get(1)?, Some(100));
//!
//! // Update values
//! map.put(1, 150)?;
//! assert_eq!(map.get(1)?, Some(150));
//! assert_eq!(map.size(), 2);
//!
//! // Keys are nullable at the boundary, but never valid
//! assert_eq!(map.get(None::<i32>), Err(MapError::NullKey));
//! # Ok::<(), MapError>(())
//! ```
//!
//! ## Custom Configuration
//!
//! ```rust
//! use simplehashmap::{MapConfig, SimpleHashMap};
//!
//! let config = MapConfig::default().with_initial_capacity(4).with_load_factor(1.0);
//! let mut map = SimpleHashMap::with_config(config)?;
//!
//! for key in 0..5 {
//!     map.put(key, i64::from(key))?;
//! }
//! assert_eq!(map.capacity(), 8);
//!
//! assert!(SimpleHashMap::with_capacity_and_load_factor(0, 0.75).is_err());
//! # Ok::<(), simplehashmap::MapError>(())
//! ```

/// Construction parameters and their defaults
mod config;
/// Error type shared by construction and key operations
mod error;
/// Module implementing the open addressing hash map
mod simple_hashmap;
/// Utility functions and traits for the hash map
mod utils;

pub use config::{DEFAULT_INITIAL_CAPACITY, DEFAULT_LOAD_FACTOR, MapConfig};
pub use error::MapError;
pub use simple_hashmap::SimpleHashMap;
pub use utils::{HashMapExtensions, from_pairs};
