mod offset;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub use offset::{REFERENCE_OFFSET_HOURS, UtcOffset};

/// Validation errors for value objects
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValueError {
    #[error("Invalid UTC offset '{0}': expected UTC±H with H in -12..=14")]
    InvalidUtcOffset(String),

    #[error("Invalid weight {0}: must be in (0, 1]")]
    InvalidWeight(f64),

    #[error("Invalid strategy id {0}: must be positive")]
    InvalidStrategyId(u64),
}

pub type ValueResult<T> = std::result::Result<T, ValueError>;

/// Identifier of the strategy the signals belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StrategyId(u64);

impl StrategyId {
    pub fn new(id: u64) -> ValueResult<Self> {
        if id == 0 {
            return Err(ValueError::InvalidStrategyId(id));
        }
        Ok(Self(id))
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for StrategyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Maximum magnitude of an entry signal, as a fraction of full allocation
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Weight(f64);

impl Weight {
    /// A full long or short entry
    pub const FULL: Weight = Weight(1.0);

    pub fn new(weight: f64) -> ValueResult<Self> {
        if !weight.is_finite() || weight <= 0.0 || weight > 1.0 {
            return Err(ValueError::InvalidWeight(weight));
        }
        Ok(Self(weight))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for Weight {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = f64::deserialize(deserializer)?;
        Weight::new(raw).map_err(serde::de::Error::custom)
    }
}
