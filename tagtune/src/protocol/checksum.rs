// tagtune/src/protocol/checksum.rs

/// Sum the payload bytes as unsigned 16-bit arithmetic.
pub fn payload_sum(payload: &[u8]) -> u16 {
    payload
        .iter()
        .fold(0u16, |acc, &b| acc.wrapping_add(u16::from(b)))
}

/// Compute the player frame checksum.
/// CHK = 0xFFFF - sum(payload) + 1 (mod 0x10000), i.e. the two's complement
/// of the summed bytes.
pub fn checksum(payload: &[u8]) -> u16 {
    0xFFFFu16
        .wrapping_sub(payload_sum(payload))
        .wrapping_add(1)
}

/// Receiver-side check: payload sum plus checksum wraps to zero.
pub fn verify(payload: &[u8], checksum: u16) -> bool {
    payload_sum(payload).wrapping_add(checksum) == 0
}
