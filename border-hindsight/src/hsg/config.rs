//! Configuration of [`Hsg`](super::Hsg).
use crate::HsgStrategy;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    default::Default,
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`Hsg`](super::Hsg).
///
/// In YAML files the strategy is written in its string form:
///
/// ```yaml
/// strategy: split3
/// seed: 42
/// ```
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct HsgConfig {
    /// Relabeling strategy.
    pub strategy: HsgStrategy,

    /// Random seed used to sample subtrajectories.
    pub seed: u64,
}

impl Default for HsgConfig {
    fn default() -> Self {
        Self {
            strategy: HsgStrategy::None,
            seed: 42,
        }
    }
}

impl HsgConfig {
    /// Sets the relabeling strategy.
    pub fn strategy(mut self, strategy: HsgStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the random seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Loads the configuration from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves the configuration to a YAML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
