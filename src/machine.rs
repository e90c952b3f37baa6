//! Machine id derivation
//!
//! The machine id is the first 3 bytes of the MD5 digest of the host name.
//! When the host name cannot be read, 3 random bytes stand in so generation
//! never fails.

use std::fmt::Display;
use std::io;

use md5::{Digest, Md5};
use tracing::warn;

/// Read the host name of the current machine
#[cfg(unix)]
pub fn hostname() -> io::Result<String> {
    nix::unistd::gethostname()
        .map_err(io::Error::from)?
        .into_string()
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidData, "host name is not valid UTF-8"))
}

/// Read the host name of the current machine
#[cfg(windows)]
pub fn hostname() -> io::Result<String> {
    gethostname::gethostname()
        .into_string()
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidData, "host name is not valid UTF-8"))
}

/// Targets with neither a unix nor a Windows host name (e.g. wasm) have none to read
#[cfg(not(any(unix, windows)))]
pub fn hostname() -> io::Result<String> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "host name lookup is not supported on this platform",
    ))
}

/// Derive a machine id from a host name
#[inline]
pub fn from_hostname(hostname: &str) -> [u8; 3] {
    let digest = Md5::digest(hostname.as_bytes());
    [digest[0], digest[1], digest[2]]
}

/// Derive a machine id from a host name lookup, substituting random bytes on failure
pub fn from_lookup<E: Display>(lookup: Result<String, E>) -> [u8; 3] {
    match lookup {
        Ok(name) => from_hostname(&name),
        Err(e) => {
            warn!(error = %e, "Failed to read host name, using a random machine id");
            rand::random()
        }
    }
}

/// Machine id for the current host
pub fn read_machine_id() -> [u8; 3] {
    from_lookup(hostname())
}
