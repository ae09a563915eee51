//! Growth policy and capacity arithmetic.

use crate::error::{DynArrayError, Result};

/// Controls how much a `DynamicArray` grows when it runs out of slots.
///
/// Validated at construction; a policy is `Copy` and travels with the
/// array through clones and moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthPolicy {
    growth_factor: f64,
    seed_capacity: usize,
}

impl GrowthPolicy {
    /// Default multiplier applied to the capacity on amortized growth.
    pub const DEFAULT_GROWTH_FACTOR: f64 = 1.5;

    /// Default capacity used as the growth base of an unallocated array.
    pub const DEFAULT_SEED_CAPACITY: usize = 8;

    /// Creates a validated growth policy.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::InvalidConfiguration` if:
    /// - `growth_factor` is not a finite number greater than 1.0
    /// - `seed_capacity` is 0
    pub fn new(growth_factor: f64, seed_capacity: usize) -> Result<Self> {
        if !growth_factor.is_finite() || growth_factor <= 1.0 {
            return Err(DynArrayError::InvalidConfiguration {
                parameter: "growth_factor",
                reason: "must be a finite number greater than 1.0",
            });
        }
        if seed_capacity == 0 {
            return Err(DynArrayError::InvalidConfiguration {
                parameter: "seed_capacity",
                reason: "must be at least 1",
            });
        }
        Ok(Self {
            growth_factor,
            seed_capacity,
        })
    }

    /// Returns a copy of this policy with a different growth factor.
    ///
    /// # Errors
    ///
    /// Same as [`GrowthPolicy::new`].
    pub fn with_growth_factor(self, growth_factor: f64) -> Result<Self> {
        Self::new(growth_factor, self.seed_capacity)
    }

    /// Returns a copy of this policy with a different seed capacity.
    ///
    /// # Errors
    ///
    /// Same as [`GrowthPolicy::new`].
    pub fn with_seed_capacity(self, seed_capacity: usize) -> Result<Self> {
        Self::new(self.growth_factor, seed_capacity)
    }

    #[must_use]
    pub fn growth_factor(&self) -> f64 {
        self.growth_factor
    }

    #[must_use]
    pub fn seed_capacity(&self) -> usize {
        self.seed_capacity
    }

    /// Capacity to grow to when a single-element insertion finds the array
    /// full: `ceil(growth_factor * max(capacity, seed_capacity))`.
    ///
    /// The result is always strictly greater than `capacity`.
    #[must_use]
    pub fn grown_capacity(&self, capacity: usize) -> usize {
        let base = capacity.max(self.seed_capacity);
        self.scale(base).max(capacity.saturating_add(1))
    }

    /// Capacity to grow to when `required` slots are known upfront, as in
    /// appending a whole array: `ceil(growth_factor * required)`.
    #[must_use]
    pub fn append_capacity(&self, required: usize) -> usize {
        self.scale(required).max(required)
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    fn scale(&self, base: usize) -> usize {
        let scaled = (self.growth_factor * base as f64).ceil();
        if scaled >= usize::MAX as f64 {
            usize::MAX
        } else {
            scaled as usize
        }
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self {
            growth_factor: Self::DEFAULT_GROWTH_FACTOR,
            seed_capacity: Self::DEFAULT_SEED_CAPACITY,
        }
    }
}
