const MULTIPLIER: u32 = 31;

/// Hashes a key into a bucket index in `0..modulus`.
///
/// The hash walks UTF-16 code units and accumulates `h * 31 + unit` with
/// unsigned 32-bit wraparound, so bucket placement matches other
/// implementations of the same table bit for bit.
///
/// `modulus` must be positive.
pub fn hash_string(key: &str, modulus: usize) -> usize {
    debug_assert!(modulus > 0);

    raw_hash(key) as usize % modulus
}

fn raw_hash(key: &str) -> u32 {
    key.encode_utf16().fold(0u32, |hash, unit| {
        hash.wrapping_mul(MULTIPLIER).wrapping_add(unit as u32)
    })
}
