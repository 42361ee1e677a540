use crate::{
    error::{Error, Result},
    table::DEFAULT_SIZE,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_SIZE: usize = 4;
pub const DEFAULT_MAX_SIZE: usize = 32;

/// Session settings. Missing fields take their defaults when deserialized.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Config {
    /// Bucket count of a fresh table.
    pub initial_size: usize,
    /// Smallest bucket count accepted by an interactive resize.
    pub min_size: usize,
    /// Largest bucket count accepted by an interactive resize.
    pub max_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_size: DEFAULT_SIZE,
            min_size: DEFAULT_MIN_SIZE,
            max_size: DEFAULT_MAX_SIZE,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.initial_size == 0 {
            return Err(invalid("initial size must be positive"));
        } else if self.min_size == 0 {
            return Err(invalid("minimum size must be positive"));
        } else if self.min_size > self.max_size {
            return Err(invalid(format!(
                "minimum size {} exceeds maximum size {}",
                self.min_size, self.max_size
            )));
        }

        Ok(())
    }

    pub fn check_resize(&self, size: usize) -> Result<()> {
        if (self.min_size..=self.max_size).contains(&size) {
            Ok(())
        } else {
            Err(Error::SizeOutOfRange {
                size,
                min: self.min_size,
                max: self.max_size,
            })
        }
    }
}

fn invalid(message: impl Into<String>) -> Error {
    Error::InvalidConfig {
        message: message.into(),
    }
}
