//! Configuration for Xid generator

mod builder;

use thiserror::Error;

pub use builder::GeneratorConfigBuilder;

use crate::machine;

/// Mask for the 24-bit counter
pub(crate) const COUNTER_MASK: u32 = 0xFF_FFFF;

/// Errors related to `GeneratorConfig` builder validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Provided counter seed does not fit in 24 bits
    #[error("Counter seed {seed} must fit in 24 bits (max {max})", max = COUNTER_MASK)]
    InvalidCounterSeed { seed: u32 },
}

/// Startup state for an Xid generator
///
/// Resolved once and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    machine_id: [u8; 3],
    process_id: u16,
    counter_seed: u32,
}

impl GeneratorConfig {
    /// Create config from builder, resolving unset fields from the environment
    pub(crate) fn from_builder(b: GeneratorConfigBuilder) -> Self {
        Self {
            machine_id: b.machine_id.unwrap_or_else(machine::read_machine_id),
            process_id: b.process_id.unwrap_or_else(current_pid),
            counter_seed: b.counter_seed.unwrap_or_else(random_seed),
        }
    }

    /// Create a new configuration builder
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::new()
    }

    /// Resolve everything from the host: host name, process id and a random seed
    pub fn from_env() -> Self {
        Self::builder().build()
    }

    #[inline(always)]
    pub const fn machine_id(&self) -> [u8; 3] {
        self.machine_id
    }

    #[inline(always)]
    pub const fn process_id(&self) -> u16 {
        self.process_id
    }

    #[inline(always)]
    pub const fn counter_seed(&self) -> u32 {
        self.counter_seed
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Current process id truncated to 16 bits
#[inline]
fn current_pid() -> u16 {
    std::process::id() as u16
}

/// Random 24-bit counter seed
#[inline]
fn random_seed() -> u32 {
    let b: [u8; 3] = rand::random();
    u32::from_be_bytes([0, b[0], b[1], b[2]])
}
