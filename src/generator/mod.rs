//! Core Xid generator implementation
//!
//! Split into modules for testability:
//! - `counter` - Atomic 24-bit counter
//! - `time` - Wall-clock time utilities
//! - `generate` - ID generation logic
//! - `encoded_methods` - Generation straight to the text form

mod counter;
mod encoded_methods;
mod generate;
mod time;

use tracing::debug;

use crate::config::GeneratorConfig;

use counter::Counter;

/// Xid generator owning the per-process startup state and the counter
///
/// Share one instance across threads (e.g. behind an `Arc` or in a static);
/// generation takes `&self`.
#[derive(Debug)]
#[repr(align(64))]
pub struct Generator {
    // === Hot path fields ===
    counter: Counter,
    machine_id: [u8; 3],
    process_id: u16,

    // === Cold path fields ===
    config: GeneratorConfig,
}

impl Generator {
    /// Create with configuration resolved from the environment
    pub fn new() -> Self {
        Self::with_config(GeneratorConfig::default())
    }

    /// Create with custom configuration
    pub fn with_config(config: GeneratorConfig) -> Self {
        debug!(
            machine_id = ?config.machine_id(),
            process_id = config.process_id(),
            "Initialized xid generator"
        );
        Self {
            counter: Counter::new(config.counter_seed()),
            machine_id: config.machine_id(),
            process_id: config.process_id(),
            config,
        }
    }

    /// Startup state this generator was built from
    #[inline]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Machine id embedded in every generated Xid
    #[inline]
    pub const fn machine_id(&self) -> [u8; 3] {
        self.machine_id
    }

    /// Process id embedded in every generated Xid
    #[inline]
    pub const fn process_id(&self) -> u16 {
        self.process_id
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}
