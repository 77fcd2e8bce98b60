/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Session configuration.

use crate::algorithms::Algorithm;
use crate::model::{DEFAULT_DELAY, DEFAULT_SIZE, MAX_SIZE, MIN_SIZE, Speed, is_valid_size};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised for out-of-domain configuration input.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The requested array size is outside `[MIN_SIZE, MAX_SIZE]`.
    #[error("array size {size} out of range [{min}, {max}]")]
    SizeOutOfRange {
        /// The rejected size.
        size: usize,
        /// Smallest accepted size.
        min: usize,
        /// Largest accepted size.
        max: usize,
    },

    /// The raw speed slider position is outside `[1, 100]`.
    #[error("speed slider position {raw} out of range [1, 100]")]
    SliderOutOfRange {
        /// The rejected slider position.
        raw: u8,
    },

    /// The configured delay is negative, infinite or not a number.
    #[error("invalid pacing delay {secs}s")]
    InvalidSpeed {
        /// The rejected delay in seconds.
        secs: f64,
    },

    /// The configuration document could not be parsed.
    #[error("invalid session configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ConfigError {
    pub(crate) fn size(size: usize) -> Self {
        Self::SizeOutOfRange {
            size,
            min: MIN_SIZE,
            max: MAX_SIZE,
        }
    }
}

/// Initial settings of a [`Session`](super::Session).
///
/// Missing fields in a JSON document take their defaults.
///
/// # Examples
///
/// ```
/// use sortviz::{Algorithm, SessionConfig};
///
/// let config = SessionConfig::from_json(r#"{ "algorithm": "HeapSort", "size": 20 }"#).unwrap();
/// assert_eq!(config.algorithm, Algorithm::HeapSort);
/// assert_eq!(config.size, 20);
/// assert_eq!(config.speed_secs, 0.05);
/// assert!(SessionConfig::from_json(r#"{ "size": 500 }"#).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Algorithm selected at startup.
    pub algorithm: Algorithm,

    /// Array length, in `[MIN_SIZE, MAX_SIZE]`.
    pub size: usize,

    /// Pause after each event, in seconds. Clamped to at least 0.001;
    /// delays beyond [`MAX_DELAY`](crate::model::MAX_DELAY) saturate.
    pub speed_secs: f64,

    /// Seed for reproducible arrays; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl SessionConfig {
    /// Parses and validates a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and the relevant
    /// range error for out-of-domain values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every field against its domain.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::SizeOutOfRange`] or
    /// [`ConfigError::InvalidSpeed`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_valid_size(self.size) {
            return Err(ConfigError::size(self.size));
        }
        if !self.speed_secs.is_finite() || self.speed_secs < 0.0 {
            return Err(ConfigError::InvalidSpeed {
                secs: self.speed_secs,
            });
        }
        Ok(())
    }

    /// The configured pacing speed.
    #[must_use]
    pub fn speed(&self) -> Speed {
        Speed::from_secs_f64(self.speed_secs)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            size: DEFAULT_SIZE,
            speed_secs: DEFAULT_DELAY.as_secs_f64(),
            seed: None,
        }
    }
}
