//! Auto-run pacing
//!
//! Speed is stored as the delay between ticks in milliseconds. The UI shows it
//! as an inverted multiplier so that "faster" reads as a bigger number.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::error::{Error, Result};

/// Delay between auto-run ticks, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Speed(u64);

impl Speed {
    pub const MIN_MS: u64 = 100;
    pub const MAX_MS: u64 = 2000;
    pub const DEFAULT_MS: u64 = 1000;

    pub fn new(millis: u64) -> Result<Self> {
        if (Self::MIN_MS..=Self::MAX_MS).contains(&millis) {
            Ok(Speed(millis))
        } else {
            Err(Error::SpeedOutOfRange(millis))
        }
    }

    pub fn millis(self) -> u64 {
        self.0
    }

    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }

    /// Multiplier shown next to the slider: `(2100 - ms) / 1000`
    pub fn multiplier(self) -> f64 {
        (Self::MAX_MS + Self::MIN_MS - self.0) as f64 / 1000.0
    }
}

impl Default for Speed {
    fn default() -> Self {
        Speed(Self::DEFAULT_MS)
    }
}

impl TryFrom<u64> for Speed {
    type Error = Error;

    fn try_from(millis: u64) -> Result<Self> {
        Speed::new(millis)
    }
}

impl From<Speed> for u64 {
    fn from(speed: Speed) -> u64 {
        speed.0
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}x", self.multiplier())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    #[test]
    fn test_bounds() {
        assert_ok!(Speed::new(100));
        assert_ok!(Speed::new(2000));
        assert_err!(Speed::new(99));
        assert_err!(Speed::new(2001));
        assert!(matches!(Speed::new(0), Err(Error::SpeedOutOfRange(0))));
    }

    #[test]
    fn test_multiplier_is_inverted() {
        assert_eq!(Speed::new(2000).unwrap().multiplier(), 0.1);
        assert_eq!(Speed::new(100).unwrap().multiplier(), 2.0);
        assert_eq!(Speed::default().multiplier(), 1.1);
        assert_eq!(Speed::new(500).unwrap().to_string(), "1.6x");
    }

    #[test]
    fn test_deserialize_rejects_out_of_range() {
        let speed: Speed = serde_json::from_str("250").unwrap();
        assert_eq!(speed.millis(), 250);
        assert!(serde_json::from_str::<Speed>("5000").is_err());
    }
}
