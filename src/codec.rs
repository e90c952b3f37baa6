/// Base32 encoding and decoding for Xid
///
/// Fixed-width codec between the 12 raw bytes of an Xid and its 20 character
/// text form. Bits are packed most-significant first over the alphabet
/// `0-9a-v`, so the text form sorts exactly like the raw bytes.
use once_cell::sync::Lazy;

/// Character set for encoding, ordered by 5-bit value
pub const ALPHABET: &[u8; 32] = b"0123456789abcdefghijklmnopqrstuv";

/// Length of the raw binary form
pub const RAW_LEN: usize = 12;

/// Length of the encoded text form
pub const ENCODED_LEN: usize = 20;

/// Marker for bytes outside the alphabet
const INVALID: u8 = 0xFF;

/// Lookup table for decoding characters to their 5-bit values
static DECODE_MAP: Lazy<[u8; 256]> = Lazy::new(|| {
    let mut map = [INVALID; 256];
    for (i, &c) in ALPHABET.iter().enumerate() {
        map[c as usize] = i as u8;
    }
    map
});

/// Errors that can occur while decoding an Xid
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The input does not have the expected number of bytes
    #[error("Expected {expected} bytes, got {found}")]
    InvalidLength { expected: usize, found: usize },

    /// The input contains a byte outside the alphabet
    #[error("Invalid character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    /// The final character carries bits that no 12-byte value encodes to
    #[error("Trailing bits of the last character must be zero")]
    NonCanonical,
}

/// Encode 12 raw bytes into their 20 character form
#[inline]
pub fn encode_array(id: &[u8; RAW_LEN]) -> [u8; ENCODED_LEN] {
    let mut dst = [0u8; ENCODED_LEN];
    encode_raw(id, &mut dst);
    dst
}

/// Encode into a caller-provided buffer, returning the buffer as `&str`
#[inline]
pub fn encode_into<'a>(id: &[u8; RAW_LEN], buf: &'a mut [u8; ENCODED_LEN]) -> &'a str {
    encode_raw(id, buf);
    as_str(buf)
}

/// Encode 12 raw bytes to an owned `String`
pub fn encode(id: &[u8; RAW_LEN]) -> String {
    as_str(&encode_array(id)).to_owned()
}

/// Decode a 20 character text form back to the 12 raw bytes
///
/// # Arguments
/// * `src` - The encoded text, as bytes or `&str`
///
/// # Returns
/// * `Result<[u8; 12], DecodeError>` - The raw bytes, or why the input was rejected
pub fn decode(src: impl AsRef<[u8]>) -> Result<[u8; RAW_LEN], DecodeError> {
    let src = src.as_ref();
    if src.len() != ENCODED_LEN {
        return Err(DecodeError::InvalidLength {
            expected: ENCODED_LEN,
            found: src.len(),
        });
    }

    let mut v = [0u8; ENCODED_LEN];
    for (position, (&byte, slot)) in src.iter().zip(v.iter_mut()).enumerate() {
        let value = DECODE_MAP[byte as usize];
        if value == INVALID {
            return Err(DecodeError::InvalidCharacter {
                character: char::from(byte),
                position,
            });
        }
        *slot = value;
    }

    // 100 encoded bits hold 96 raw bits; the last character only carries one
    if v[19] & 0x0F != 0 {
        return Err(DecodeError::NonCanonical);
    }

    Ok([
        (v[0] << 3) | (v[1] >> 2),
        (v[1] << 6) | (v[2] << 1) | (v[3] >> 4),
        (v[3] << 4) | (v[4] >> 1),
        (v[4] << 7) | (v[5] << 2) | (v[6] >> 3),
        (v[6] << 5) | v[7],
        (v[8] << 3) | (v[9] >> 2),
        (v[9] << 6) | (v[10] << 1) | (v[11] >> 4),
        (v[11] << 4) | (v[12] >> 1),
        (v[12] << 7) | (v[13] << 2) | (v[14] >> 3),
        (v[14] << 5) | v[15],
        (v[16] << 3) | (v[17] >> 2),
        (v[17] << 6) | (v[18] << 1) | (v[19] >> 4),
    ])
}

#[inline(always)]
fn encode_raw(id: &[u8; RAW_LEN], dst: &mut [u8; ENCODED_LEN]) {
    let a = ALPHABET;
    dst[0] = a[(id[0] >> 3) as usize];
    dst[1] = a[(((id[1] >> 6) & 0x1F) | ((id[0] << 2) & 0x1F)) as usize];
    dst[2] = a[((id[1] >> 1) & 0x1F) as usize];
    dst[3] = a[(((id[2] >> 4) & 0x1F) | ((id[1] << 4) & 0x1F)) as usize];
    dst[4] = a[((id[3] >> 7) | ((id[2] << 1) & 0x1F)) as usize];
    dst[5] = a[((id[3] >> 2) & 0x1F) as usize];
    dst[6] = a[((id[4] >> 5) | ((id[3] << 3) & 0x1F)) as usize];
    dst[7] = a[(id[4] & 0x1F) as usize];
    dst[8] = a[(id[5] >> 3) as usize];
    dst[9] = a[(((id[6] >> 6) & 0x1F) | ((id[5] << 2) & 0x1F)) as usize];
    dst[10] = a[((id[6] >> 1) & 0x1F) as usize];
    dst[11] = a[(((id[7] >> 4) & 0x1F) | ((id[6] << 4) & 0x1F)) as usize];
    dst[12] = a[((id[8] >> 7) | ((id[7] << 1) & 0x1F)) as usize];
    dst[13] = a[((id[8] >> 2) & 0x1F) as usize];
    dst[14] = a[((id[9] >> 5) | ((id[8] << 3) & 0x1F)) as usize];
    dst[15] = a[(id[9] & 0x1F) as usize];
    dst[16] = a[(id[10] >> 3) as usize];
    dst[17] = a[(((id[11] >> 6) & 0x1F) | ((id[10] << 2) & 0x1F)) as usize];
    dst[18] = a[((id[11] >> 1) & 0x1F) as usize];
    dst[19] = a[((id[11] << 4) & 0x1F) as usize];
}

#[inline(always)]
fn as_str(buf: &[u8; ENCODED_LEN]) -> &str {
    // Every byte comes from ALPHABET, which is ASCII
    match std::str::from_utf8(buf) {
        Ok(s) => s,
        Err(_) => unreachable!("encoded xid is always ASCII"),
    }
}
