//! The Xid value type

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::codec::{self, ENCODED_LEN, RAW_LEN};
use crate::error::XidError;
use crate::extractor;

/// A 12-byte globally unique identifier
///
/// Layout, big-endian within each field:
///
/// | Bytes | Field |
/// |-------|-------|
/// | 0-3   | Unix seconds |
/// | 4-6   | Machine id |
/// | 7-8   | Process id |
/// | 9-11  | Counter |
///
/// Equality and ordering are over the raw bytes, which matches the ordering
/// of the encoded text form.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Xid([u8; RAW_LEN]);

impl Xid {
    /// The all-zero identifier
    pub const NIL: Xid = Xid([0; RAW_LEN]);

    /// Generate a new Xid from the process-wide default generator
    #[inline]
    pub fn new() -> Self {
        crate::new()
    }

    /// Build an Xid from its four fields
    ///
    /// Only the low 24 bits of `counter` are kept.
    #[inline]
    pub const fn from_parts(time: u32, machine: [u8; 3], pid: u16, counter: u32) -> Self {
        Self(extractor::assemble(time, machine, pid, counter))
    }

    /// Wrap 12 raw bytes
    #[inline]
    pub const fn from_raw(raw: [u8; RAW_LEN]) -> Self {
        Self(raw)
    }

    /// Build an Xid from a byte slice
    ///
    /// # Returns
    /// * `Result<Xid, XidError>` - `InvalidId` unless the slice is exactly 12 bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, XidError> {
        let raw: [u8; RAW_LEN] = bytes
            .try_into()
            .map_err(|_| XidError::invalid_length(RAW_LEN, bytes.len()))?;
        Ok(Self(raw))
    }

    /// Parse an Xid from its 20 character text form
    pub fn from_string(s: &str) -> Result<Self, XidError> {
        Ok(Self(codec::decode(s)?))
    }

    /// Unix seconds at creation
    #[inline]
    pub const fn time(&self) -> u32 {
        extractor::time(&self.0)
    }

    /// Creation time as a UTC datetime
    pub fn timestamp(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(i64::from(self.time()), 0).unwrap_or_default()
    }

    /// Machine id of the generating host
    #[inline]
    pub const fn machine(&self) -> [u8; 3] {
        extractor::machine(&self.0)
    }

    /// Process id of the generating process, truncated to 16 bits
    #[inline]
    pub const fn pid(&self) -> u16 {
        extractor::pid(&self.0)
    }

    /// 24-bit counter value
    #[inline]
    pub const fn counter(&self) -> u32 {
        extractor::counter(&self.0)
    }

    /// Decompose into (time, machine, pid, counter)
    #[inline]
    pub const fn decompose(&self) -> (u32, [u8; 3], u16, u32) {
        extractor::decompose(&self.0)
    }

    /// Raw bytes
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; RAW_LEN] {
        &self.0
    }

    /// Owned copy of the raw bytes
    #[inline]
    pub const fn to_bytes(self) -> [u8; RAW_LEN] {
        self.0
    }

    /// Whether this is the all-zero identifier
    #[inline]
    pub fn is_nil(&self) -> bool {
        *self == Self::NIL
    }

    /// Encode into a fixed array without allocating
    #[inline]
    pub fn encode(&self) -> [u8; ENCODED_LEN] {
        codec::encode_array(&self.0)
    }

    /// Encode into a caller-provided buffer
    #[inline]
    pub fn encode_into<'a>(&self, buf: &'a mut [u8; ENCODED_LEN]) -> &'a str {
        codec::encode_into(&self.0, buf)
    }
}

impl Default for Xid {
    fn default() -> Self {
        Self::NIL
    }
}

impl fmt::Display for Xid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; ENCODED_LEN];
        f.write_str(self.encode_into(&mut buf))
    }
}

impl fmt::Debug for Xid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; ENCODED_LEN];
        f.debug_tuple("Xid").field(&self.encode_into(&mut buf)).finish()
    }
}

impl FromStr for Xid {
    type Err = XidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl TryFrom<&str> for Xid {
    type Error = XidError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::from_string(s)
    }
}

impl TryFrom<&[u8]> for Xid {
    type Error = XidError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}

impl From<[u8; RAW_LEN]> for Xid {
    fn from(raw: [u8; RAW_LEN]) -> Self {
        Self(raw)
    }
}

impl From<Xid> for [u8; RAW_LEN] {
    fn from(id: Xid) -> Self {
        id.0
    }
}

impl AsRef<[u8]> for Xid {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::DecodeError;

    const RAW: [u8; RAW_LEN] = [
        0x4D, 0x88, 0xE1, 0x5B, 0x60, 0xF4, 0x86, 0xE4, 0x28, 0x41, 0x2D, 0xC9,
    ];

    #[test]
    fn test_display_and_debug() {
        let id = Xid::from_raw(RAW);
        assert_eq!(id.to_string(), "9m4e2mr0ui3e8a215n4g");
        assert_eq!(format!("{id:?}"), "Xid(\"9m4e2mr0ui3e8a215n4g\")");
    }

    #[test]
    fn test_from_parts_matches_raw() {
        let id = Xid::from_parts(1300816219, [0x60, 0xF4, 0x86], 0xE428, 4271561);
        assert_eq!(id, Xid::from_raw(RAW));
    }

    #[test]
    fn test_from_bytes_length() {
        assert_eq!(Xid::from_bytes(&RAW).unwrap().to_bytes(), RAW);
        assert_eq!(
            Xid::from_bytes(&[0xFF]),
            Err(XidError::InvalidId(DecodeError::InvalidLength {
                expected: 12,
                found: 1
            }))
        );
        assert!(Xid::from_bytes(&[0u8; 13]).is_err());
    }

    #[test]
    fn test_timestamp() {
        let id = Xid::from_raw(RAW);
        assert_eq!(id.timestamp().timestamp(), 1300816219);
        assert_eq!(Xid::NIL.timestamp(), DateTime::<Utc>::UNIX_EPOCH);
    }

    #[test]
    fn test_nil() {
        assert!(Xid::NIL.is_nil());
        assert!(Xid::default().is_nil());
        assert!(!Xid::from_raw(RAW).is_nil());
        assert_eq!(Xid::NIL.to_string(), "00000000000000000000");
    }

    #[test]
    fn test_conversions() {
        let id: Xid = RAW.into();
        let back: [u8; RAW_LEN] = id.into();
        assert_eq!(back, RAW);
        assert_eq!(id.as_ref(), &RAW[..]);
        assert_eq!(Xid::try_from(&RAW[..]).unwrap(), id);
        assert_eq!(Xid::try_from("9m4e2mr0ui3e8a215n4g").unwrap(), id);
        assert_eq!("9m4e2mr0ui3e8a215n4g".parse::<Xid>().unwrap(), id);
    }
}
