use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

/// A value that never leaves `[min, max]`.
///
/// Every write clamps. Moving a bound re-clamps the current value. If the
/// bounds cross, the upper bound is checked first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounded<T> {
    min: T,
    max: T,
    value: T,
}

impl<T: Copy + PartialOrd> Bounded<T> {
    /// Starts at `min`.
    pub fn new(min: T, max: T) -> Self {
        Self {
            min,
            max,
            value: min,
        }
    }

    pub fn with_value(min: T, max: T, value: T) -> Self {
        let mut res = Self::new(min, max);
        res.set(value);
        res
    }

    pub fn get(&self) -> T {
        self.value
    }

    pub fn min(&self) -> T {
        self.min
    }

    pub fn max(&self) -> T {
        self.max
    }

    pub fn set(&mut self, value: T) {
        self.value = if value > self.max {
            self.max
        } else if value < self.min {
            self.min
        } else {
            value
        };
    }

    pub fn set_min(&mut self, min: T) {
        self.min = min;
        self.set(self.value);
    }

    pub fn set_max(&mut self, max: T) {
        self.max = max;
        self.set(self.value);
    }
}

impl<T: Copy + PartialOrd + Default> Default for Bounded<T> {
    fn default() -> Self {
        Self::new(T::default(), T::default())
    }
}

impl<T: Copy + PartialOrd + Add<Output = T>> std::ops::AddAssign<T> for Bounded<T> {
    fn add_assign(&mut self, amount: T) {
        self.set(self.value + amount);
    }
}

impl<T: Copy + PartialOrd + Mul<Output = T>> std::ops::MulAssign<T> for Bounded<T> {
    fn mul_assign(&mut self, factor: T) {
        self.set(self.value * factor);
    }
}
