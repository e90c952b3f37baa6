use crate::codec::RAW_LEN;

/// Extract the timestamp (Unix seconds) from bytes 0-3
#[inline(always)]
pub const fn time(raw: &[u8; RAW_LEN]) -> u32 {
    u32::from_be_bytes([raw[0], raw[1], raw[2], raw[3]])
}

/// Extract the machine id from bytes 4-6
#[inline(always)]
pub const fn machine(raw: &[u8; RAW_LEN]) -> [u8; 3] {
    [raw[4], raw[5], raw[6]]
}

/// Extract the process id from bytes 7-8
#[inline(always)]
pub const fn pid(raw: &[u8; RAW_LEN]) -> u16 {
    u16::from_be_bytes([raw[7], raw[8]])
}

/// Extract the 24-bit counter from bytes 9-11
#[inline(always)]
pub const fn counter(raw: &[u8; RAW_LEN]) -> u32 {
    u32::from_be_bytes([0, raw[9], raw[10], raw[11]])
}

/// Decompose raw bytes into their components: time, machine, pid and counter
#[inline]
pub const fn decompose(raw: &[u8; RAW_LEN]) -> (u32, [u8; 3], u16, u32) {
    (time(raw), machine(raw), pid(raw), counter(raw))
}

/// Lay out the four fields big-endian into 12 bytes
///
/// Only the low 24 bits of `counter` are kept.
#[inline(always)]
pub const fn assemble(time: u32, machine: [u8; 3], pid: u16, counter: u32) -> [u8; RAW_LEN] {
    let t = time.to_be_bytes();
    let p = pid.to_be_bytes();
    let c = counter.to_be_bytes();
    [
        t[0], t[1], t[2], t[3], machine[0], machine[1], machine[2], p[0], p[1], c[1], c[2], c[3],
    ]
}
