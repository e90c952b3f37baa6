//! GeneratorConfig builder for constructing configuration

use super::{ConfigError, GeneratorConfig, COUNTER_MASK};

/// Builder for GeneratorConfig
///
/// Fields left unset are resolved from the environment at `build()`.
#[derive(Debug, Default)]
pub struct GeneratorConfigBuilder {
    pub(super) machine_id: Option<[u8; 3]>,
    pub(super) process_id: Option<u16>,
    pub(super) counter_seed: Option<u32>,
}

impl GeneratorConfigBuilder {
    /// Create a new GeneratorConfigBuilder with nothing set
    pub const fn new() -> Self {
        Self {
            machine_id: None,
            process_id: None,
            counter_seed: None,
        }
    }

    /// Use a fixed machine id instead of hashing the host name
    pub const fn machine_id(mut self, id: [u8; 3]) -> Self {
        self.machine_id = Some(id);
        self
    }

    /// Use a fixed process id instead of the OS one
    pub const fn process_id(mut self, pid: u16) -> Self {
        self.process_id = Some(pid);
        self
    }

    /// Start the counter from a fixed value (0 to 2^24 - 1)
    pub fn counter_seed(mut self, seed: u32) -> Result<Self, ConfigError> {
        if seed > COUNTER_MASK {
            return Err(ConfigError::InvalidCounterSeed { seed });
        }
        self.counter_seed = Some(seed);
        Ok(self)
    }

    /// Build the final GeneratorConfig
    pub fn build(self) -> GeneratorConfig {
        GeneratorConfig::from_builder(self)
    }
}
