//! Text-form convenience methods for Xid generator

use crate::codec::ENCODED_LEN;
use crate::id::Xid;

use super::Generator;

impl Generator {
    /// Generate a new encoded Xid (zero-allocation, array-based)
    #[inline]
    pub fn generate_encoded(&self) -> [u8; ENCODED_LEN] {
        self.generate().encode()
    }

    /// Generate a new encoded Xid into caller-provided buffer
    #[inline]
    pub fn generate_into<'a>(&self, buf: &'a mut [u8; ENCODED_LEN]) -> (&'a str, Xid) {
        let id = self.generate();
        (id.encode_into(buf), id)
    }

    /// Generate a new encoded Xid (allocates String)
    pub fn generate_string(&self) -> String {
        self.generate().to_string()
    }
}
