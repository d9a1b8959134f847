use log::{debug, trace};

use crate::{
    MapError,
    config::{DEFAULT_INITIAL_CAPACITY, DEFAULT_LOAD_FACTOR, MapConfig},
};

/// An occupied slot holding a key-value pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Slot {
    /// The key in the key-value pair
    key: i32,
    /// The value last put for the key
    value: i64,
}

/// Outcome of walking the probe sequence of a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Probe {
    /// The key sits at `index`, `distance` slots past its home slot
    Found { index: usize, distance: usize },
    /// The key is absent and `index` is the first empty slot on its sequence
    Vacant { index: usize },
    /// Every slot was visited without meeting the key or an empty slot
    Exhausted,
}

/// A hash map from `i32` keys to `i64` values using open addressing with linear probing.
///
/// Entries live directly in one slot vector. A key is placed at its home slot
/// (`key & i32::MAX` modulo the capacity) or, when that slot is taken, at the next
/// free slot found by stepping forward one slot at a time with wraparound. Before
/// every insertion the map doubles its capacity once `size >= load_factor * capacity`,
/// so an empty slot always remains and probe sequences terminate.
///
/// Keys are nullable at the API boundary: `put`, `get` and `probe_distance` accept
/// anything convertible into `Option<i32>` and refuse `None` with `MapError::NullKey`.
///
/// Note: This implementation is not thread-safe. Share it behind a `Mutex` if needed.
///
/// ```rust
/// use simplehashmap::SimpleHashMap;
///
/// let mut map = SimpleHashMap::new();
/// map.put(1, 100)?;
/// map.put(17, 200)?; // same home slot as 1 at capacity 16
///
/// assert_eq!(map.get(1)?, Some(100));
/// assert_eq!(map.get(17)?, Some(200));
/// assert_eq!(map.get(2)?, None);
/// assert_eq!(map.size(), 2);
/// # Ok::<(), simplehashmap::MapError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SimpleHashMap {
    /// The slots storing the key-value pairs, `None` marks an empty slot
    slots: Vec<Option<Slot>>,
    /// Current number of occupied slots
    size: usize,
    /// Fill ratio at which the map doubles before the next insertion
    load_factor: f64,
}

impl Default for SimpleHashMap {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<(i32, i64)> for SimpleHashMap {
    fn extend<T: IntoIterator<Item = (i32, i64)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl SimpleHashMap {
    /// Creates an empty map with 16 slots and a load factor of 0.75
    #[must_use]
    pub fn new() -> Self {
        Self::empty(DEFAULT_INITIAL_CAPACITY.unsigned_abs(), DEFAULT_LOAD_FACTOR)
    }

    /// Creates an empty map with the given capacity and load factor.
    ///
    /// # Errors
    ///
    /// `MapError::InvalidArgument` if `capacity <= 0` or `load_factor` is outside `(0, 1]`.
    pub fn with_capacity_and_load_factor(capacity: isize, load_factor: f64) -> Result<Self, MapError> {
        Self::with_config(MapConfig::new(capacity, load_factor))
    }

    /// Creates an empty map from a configuration.
    ///
    /// # Errors
    ///
    /// `MapError::InvalidArgument` if the configuration does not validate.
    pub fn with_config(config: MapConfig) -> Result<Self, MapError> {
        let capacity = config.validate()?;
        Ok(Self::empty(capacity, config.load_factor))
    }

    /// Allocates `capacity` empty slots. Parameters are assumed valid.
    fn empty(capacity: usize, load_factor: f64) -> Self {
        trace!("allocating {capacity} slots, load factor {load_factor}");
        Self { slots: vec![None; capacity], size: 0, load_factor }
    }

    /// Gets the home slot of a key
    #[allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]
    fn hash(&self, key: i32) -> usize {
        // The integer is its own hash code; masking the sign bit keeps it non-negative.
        (key & i32::MAX).unsigned_abs() as usize % self.slots.len()
    }

    /// Walks the probe sequence of `key`, visiting each slot at most once
    #[allow(clippy::arithmetic_side_effects)]
    fn probe(&self, key: i32) -> Probe {
        let capacity = self.slots.len();
        let mut index = self.hash(key);

        for distance in 0..capacity {
            match self.slots.get(index) {
                Some(None) => return Probe::Vacant { index },
                Some(Some(slot)) if slot.key == key => return Probe::Found { index, distance },
                Some(Some(_)) => {}
                None => break,
            }

            // Wrap by capacity, never by size
            index = index.saturating_add(1) % capacity;
        }

        Probe::Exhausted
    }

    /// Whether the next insertion has to grow the map first
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    fn is_at_threshold(&self) -> bool {
        self.size as f64 >= self.load_factor * self.slots.len() as f64
    }

    /// Associates `value` with `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// `MapError::NullKey` if `key` is `None`; the map is left unchanged.
    pub fn put(&mut self, key: impl Into<Option<i32>>, value: i64) -> Result<(), MapError> {
        let key = key.into().ok_or(MapError::NullKey)?;
        self.insert(key, value);
        Ok(())
    }

    /// Inserts or updates an entry, growing first when the threshold is reached
    fn insert(&mut self, key: i32, value: i64) {
        if self.is_at_threshold() {
            self.resize(self.slots.len().saturating_mul(2));
        }

        self.place(key, value);
    }

    /// Writes an entry at the end of its probe sequence without checking the threshold
    fn place(&mut self, key: i32, value: i64) {
        match self.probe(key) {
            Probe::Found { index, .. } => {
                if let Some(Some(slot)) = self.slots.get_mut(index) {
                    slot.value = value;
                }
            }
            Probe::Vacant { index } => {
                if let Some(empty) = self.slots.get_mut(index) {
                    *empty = Some(Slot { key, value });
                    self.size = self.size.saturating_add(1);
                }
            }
            // Safeguard only: growth before insertion and rehashing into a larger
            // table both leave an empty slot
            Probe::Exhausted => {}
        }
    }

    /// Rebuilds the map with `new_capacity` slots, rehashing every entry in slot order.
    ///
    /// Entries are placed directly so the rebuild itself never grows the table.
    fn resize(&mut self, new_capacity: usize) {
        debug!("resizing from {} to {new_capacity} slots ({} entries)", self.slots.len(), self.size);

        let mut resized = Self::empty(new_capacity, self.load_factor);
        for slot in self.slots.iter().flatten() {
            resized.place(slot.key, slot.value);
        }

        // Replace the current storage with the rehashed one
        *self = resized;
    }

    /// Returns the value last put for `key`, or `None` if it was never put.
    ///
    /// # Errors
    ///
    /// `MapError::NullKey` if `key` is `None`.
    pub fn get(&self, key: impl Into<Option<i32>>) -> Result<Option<i64>, MapError> {
        let key = key.into().ok_or(MapError::NullKey)?;
        Ok(match self.probe(key) {
            Probe::Found { index, .. } => {
                self.slots.get(index).copied().flatten().map(|slot| slot.value)
            }
            Probe::Vacant { .. } | Probe::Exhausted => None,
        })
    }

    /// Returns how many slots past its home slot `key` is stored, or `None` if absent.
    ///
    /// # Errors
    ///
    /// `MapError::NullKey` if `key` is `None`.
    pub fn probe_distance(&self, key: impl Into<Option<i32>>) -> Result<Option<usize>, MapError> {
        let key = key.into().ok_or(MapError::NullKey)?;
        Ok(match self.probe(key) {
            Probe::Found { distance, .. } => Some(distance),
            Probe::Vacant { .. } | Probe::Exhausted => None,
        })
    }

    /// Returns the number of distinct keys in the map
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true if nothing has been put yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of slots
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the configured growth threshold
    #[must_use]
    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Returns the current ratio of occupied slots to capacity
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn fill_ratio(&self) -> f64 {
        self.size as f64 / self.slots.len() as f64
    }
}
