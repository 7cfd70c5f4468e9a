//! Octet string helpers from RFC 2437 § 4 and § 9.

use alloc::vec::Vec;

use crate::errors::{EncodingError, Result};

/// Converts a counter into a 4 octet, big endian string.
///
/// This is I2OSP from [RFC 2437 § 4.1] fixed to `xLen = 4`, the only width
/// MGF1 needs. Fails if `x >= 256^4`.
///
/// [RFC 2437 § 4.1]: https://datatracker.ietf.org/doc/html/rfc2437#section-4.1
#[inline]
pub fn i2osp(x: u64) -> Result<[u8; 4]> {
    let x = u32::try_from(x).map_err(|_| EncodingError::IntegerTooLarge)?;
    Ok(x.to_be_bytes())
}

/// Bitwise exclusive-or of two octet strings of the same length.
#[inline]
pub fn xor(a: &[u8], b: &[u8]) -> Result<Vec<u8>> {
    if a.len() != b.len() {
        return Err(EncodingError::LengthMismatch.into());
    }

    Ok(a.iter().zip(b).map(|(x, y)| x ^ y).collect())
}

/// Length of an encoded message for a modulus of `key_bits` bits: `k - 1`
/// octets where `k = key_bits / 8`.
///
/// Returns `None` if the modulus is shorter than one octet.
#[inline]
pub fn encoded_len(key_bits: usize) -> Option<usize> {
    (key_bits / 8).checked_sub(1)
}
