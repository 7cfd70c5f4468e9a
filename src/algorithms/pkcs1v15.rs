//! EME-PKCS1-v1_5 encoding and decoding as described in [RFC 2437 § 9.1.2].
//!
//! [RFC 2437 § 9.1.2]: https://datatracker.ietf.org/doc/html/rfc2437#section-9.1.2

use alloc::vec::Vec;
use rand_core::CryptoRngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, ConstantTimeGreater};
use zeroize::Zeroizing;

use super::octets::encoded_len;
use crate::errors::{EncodingError, Error, Result};

/// Minimum length of the padding string PS.
const MIN_PS_LEN: usize = 8;

/// Shortest well formed encoding: `0x02 || PS || 0x00` with an 8 octet PS.
const MIN_EM_LEN: usize = MIN_PS_LEN + 2;

/// Fills the provided slice with random values, which are guaranteed
/// to not be zero.
#[inline]
fn non_zero_random_bytes<R: CryptoRngCore + ?Sized>(rng: &mut R, data: &mut [u8]) {
    rng.fill_bytes(data);

    for el in data {
        while *el == 0u8 {
            rng.fill_bytes(core::slice::from_mut(el));
        }
    }
}

/// Longest message that fits into an EME-PKCS1-v1_5 encoding for `key_bits`:
/// `emLen - 10`.
#[inline]
pub(crate) fn pkcs1v15_max_message_len(key_bits: usize) -> Option<usize> {
    encoded_len(key_bits)?.checked_sub(MIN_EM_LEN)
}

/// Applies the EME-PKCS1-v1_5 encoding to `msg`.
///
/// The message must be no longer than `key_bits / 8 - 11` octets.
pub(crate) fn pkcs1v15_encode<R>(
    rng: &mut R,
    msg: &[u8],
    key_bits: usize,
) -> Result<Zeroizing<Vec<u8>>>
where
    R: CryptoRngCore + ?Sized,
{
    let max_len = pkcs1v15_max_message_len(key_bits).ok_or(EncodingError::MessageTooLong)?;
    if msg.len() > max_len {
        return Err(EncodingError::MessageTooLong.into());
    }

    let em_len = max_len + MIN_EM_LEN;
    let ps_len = em_len - msg.len() - 2;

    // EM = 0x02 || PS || 0x00 || M
    let mut em = Zeroizing::new(vec![0u8; em_len]);
    em[0] = 2;
    non_zero_random_bytes(rng, &mut em[1..ps_len + 1]);
    em[ps_len + 1] = 0;
    em[ps_len + 2..].copy_from_slice(msg);
    Ok(em)
}

/// Removes the EME-PKCS1-v1_5 encoding from `em`.
///
/// The leading marker, the separator search and the PS length are evaluated
/// in constant time; any failure returns [`Error::Decoding`].
pub(crate) fn pkcs1v15_decode(em: &[u8]) -> Result<Vec<u8>> {
    if em.len() < MIN_EM_LEN {
        return Err(Error::Decoding);
    }

    let first_byte_is_two = em[0].ct_eq(&2u8);

    // The remainder must be a string of non-zero random octets, followed by
    // a 0, followed by the message.
    //   looking_for_index: 1 iff we are still looking for the zero.
    //   index: the offset of the first zero byte.
    let mut looking_for_index = Choice::from(1u8);
    let mut index = 0u32;

    for (i, el) in em.iter().enumerate().skip(1) {
        let equals0 = el.ct_eq(&0u8);
        index.conditional_assign(&(i as u32), looking_for_index & equals0);
        looking_for_index &= !equals0;
    }

    // PS = em[1..index] must be at least 8 octets long.
    let valid_ps = index.ct_gt(&(MIN_PS_LEN as u32));
    let valid = first_byte_is_two & !looking_for_index & valid_ps;
    if valid.unwrap_u8() != 1 {
        return Err(Error::Decoding);
    }

    Ok(em[index as usize + 1..].to_vec())
}
