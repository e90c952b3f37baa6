//! # Xid
//!
//! Globally unique 12-byte identifiers with a 20 character text form.
//!
//! Generated IDs are:
//! - 📈 Time-sorted (Unix seconds first)
//! - 🔒 Thread-safe (atomic 24-bit counter)
//! - 🌐 Coordination-free (machine id + process id + counter)
//! - 🔤 URL-safe and sortable as text (`0-9a-v` base32, no padding)
//!
//! ```
//! let id = xid::new();
//! let parsed = xid::from_string(&id.to_string()).unwrap();
//! assert_eq!(id, parsed);
//! ```

#![forbid(unsafe_code)]

pub mod codec;
mod config;
mod error;
pub mod extractor;
mod generator;
mod id;
pub mod machine;
#[cfg(feature = "serde")]
mod serde;


use once_cell::sync::Lazy;

// Re-export main types
pub use codec::DecodeError;
pub use codec::{ALPHABET, ENCODED_LEN, RAW_LEN};
pub use config::{ConfigError, GeneratorConfig, GeneratorConfigBuilder};
pub use error::XidError;
pub use generator::Generator;
pub use id::Xid;

/// Process-wide generator, initialized on first use
static DEFAULT_GENERATOR: Lazy<Generator> = Lazy::new(Generator::new);

/// The process-wide generator behind [`new`]
pub fn default_generator() -> &'static Generator {
    &DEFAULT_GENERATOR
}

/// Generate a new Xid from the process-wide generator
#[inline]
pub fn new() -> Xid {
    DEFAULT_GENERATOR.generate()
}

/// Build an Xid from exactly 12 raw bytes
pub fn from_bytes(bytes: &[u8]) -> Result<Xid, XidError> {
    Xid::from_bytes(bytes)
}

/// Parse an Xid from its 20 character text form
pub fn from_string(s: &str) -> Result<Xid, XidError> {
    Xid::from_string(s)
}
