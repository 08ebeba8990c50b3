//! Sequential integer codes identifying furniture items.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unique, monotonically assigned identifier of a
/// [`Furniture`](crate::furniture::Furniture) item.
///
/// Serialized as a bare JSON integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FurnitureCode(i64);

impl FurnitureCode {
    /// Code assigned to the first item of an empty collection.
    pub const FIRST: Self = Self(1);

    /// Wrap a raw integer code.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Access the raw integer.
    #[must_use]
    pub fn value(self) -> i64 {
        self.0
    }

    /// Code following the current maximum of a collection.
    ///
    /// `None` means the collection is empty, which yields [`Self::FIRST`].
    #[must_use]
    pub fn after(max: Option<Self>) -> Self {
        max.map_or(Self::FIRST, |code| Self(code.0 + 1))
    }
}

impl fmt::Display for FurnitureCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Text that does not denote an integral code.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{0:?} is not a furniture code")]
pub struct ParseCodeError(String);

impl FromStr for FurnitureCode {
    type Err = ParseCodeError;

    /// Accepts any numeric spelling of an integer, so `1`, `1.0` and `1e0`
    /// all name code 1.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(value) = trimmed.parse::<i64>() {
            return Ok(Self(value));
        }
        trimmed
            .parse::<f64>()
            .ok()
            .filter(|value| {
                value.is_finite()
                    && value.fract() == 0.0
                    && *value >= i64::MIN as f64
                    && *value < i64::MAX as f64
            })
            .map(|value| Self(value as i64))
            .ok_or_else(|| ParseCodeError(s.to_string()))
    }
}
