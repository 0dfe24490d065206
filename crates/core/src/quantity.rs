//! Stock quantities.
//!
//! Quantities are fractional-permissive: any finite `f64` is accepted. Whole
//! numbers print and serialize without a fractional part, so a file written
//! with `7` reads back and saves again as `7`.

use core::cmp::Ordering;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value as JsonValue;

use crate::error::InventoryError;
use crate::value_object::ValueObject;

/// Largest magnitude at which every integer is exactly representable in `f64`.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// A finite stock amount. May be negative or fractional.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default)]
pub struct Quantity(f64);

impl Quantity {
    pub const ZERO: Quantity = Quantity(0.0);

    /// Whole-number quantity, usable in `const` contexts.
    pub const fn whole(n: i32) -> Self {
        Self(n as f64)
    }

    pub fn new(value: f64) -> Result<Self, InventoryError> {
        if !value.is_finite() {
            return Err(InventoryError::invalid_input(format!(
                "quantity {value} is not a finite number"
            )));
        }
        // Normalize -0.0 so it never prints as "-0".
        Ok(Self(if value == 0.0 { 0.0 } else { value }))
    }

    /// Boundary check for untyped input: the value must be a JSON number.
    pub fn from_json(value: &JsonValue) -> Result<Self, InventoryError> {
        match value.as_f64() {
            Some(v) => Self::new(v),
            _ => Err(InventoryError::invalid_input(format!(
                "quantity {value} is not a number"
            ))),
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Stored entries must stay strictly positive.
    pub fn is_positive(self) -> bool {
        self.0 > 0.0
    }

    pub fn is_integral(self) -> bool {
        self.0.fract() == 0.0 && self.0.abs() <= MAX_EXACT_INTEGER
    }

    pub fn checked_add(self, rhs: Quantity) -> Option<Quantity> {
        Quantity::new(self.0 + rhs.0).ok()
    }

    pub fn checked_sub(self, rhs: Quantity) -> Option<Quantity> {
        Quantity::new(self.0 - rhs.0).ok()
    }
}

impl ValueObject for Quantity {}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // f64's Display already omits ".0" for whole numbers.
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl PartialEq<f64> for Quantity {
    fn eq(&self, other: &f64) -> bool {
        self.0 == *other
    }
}

impl PartialOrd<f64> for Quantity {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.0.partial_cmp(other)
    }
}

impl From<i32> for Quantity {
    fn from(value: i32) -> Self {
        Self(f64::from(value))
    }
}

impl TryFrom<f64> for Quantity {
    type Error = InventoryError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_integral() {
            serializer.serialize_i64(self.0 as i64)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = f64::deserialize(deserializer)?;
        Quantity::new(raw).map_err(serde::de::Error::custom)
    }
}
