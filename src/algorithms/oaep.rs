//! EME-OAEP encoding and decoding as described in [RFC 2437 § 9.1.1].
//!
//! [RFC 2437 § 9.1.1]: https://datatracker.ietf.org/doc/html/rfc2437#section-9.1.1
use alloc::vec::Vec;

use digest::Digest;
use rand_core::CryptoRngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroizing;

use super::mgf::mgf1;
use super::octets::{encoded_len, xor};
use crate::errors::{EncodingError, Error, Result};

// 2**61 -1 (pow is not const yet)
// TODO: This is the maximum for SHA-1, unclear from the RFC what the values are for other hashing functions.
const MAX_LABEL_LEN: u64 = 2_305_843_009_213_693_951;

/// Longest message that fits into an EME-OAEP encoding for `key_bits`:
/// `emLen - 2 * hLen - 1`.
#[inline]
pub(crate) fn oaep_max_message_len(h_len: usize, key_bits: usize) -> Option<usize> {
    encoded_len(key_bits)?.checked_sub(2 * h_len + 1)
}

/// Applies EME-OAEP encoding to `msg`.
///
/// `D` hashes the label, `MGD` drives MGF1. The result is
/// `maskedSeed || maskedDB`, `key_bits / 8 - 1` octets long.
pub(crate) fn oaep_encode<R, D, MGD>(
    rng: &mut R,
    msg: &[u8],
    label: &[u8],
    key_bits: usize,
) -> Result<Zeroizing<Vec<u8>>>
where
    R: CryptoRngCore + ?Sized,
    D: Digest,
    MGD: Digest,
{
    let h_len = <D as Digest>::output_size();

    // Both the key size and the message length are checked here: a key too
    // small for even an empty message has no maximum at all.
    let max_len = oaep_max_message_len(h_len, key_bits).ok_or(EncodingError::MessageTooLong)?;
    if msg.len() > max_len {
        return Err(EncodingError::MessageTooLong.into());
    }

    if label.len() as u64 > MAX_LABEL_LEN {
        return Err(EncodingError::LabelTooLong.into());
    }

    let em_len = max_len + 2 * h_len + 1;
    let ps_len = max_len - msg.len();

    // Data block DB = pHash || PS || 01 || M
    let mut db = Zeroizing::new(Vec::with_capacity(em_len - h_len));
    db.extend_from_slice(&D::digest(label));
    db.resize(h_len + ps_len, 0);
    db.push(1);
    db.extend_from_slice(msg);
    debug_assert_eq!(db.len(), em_len - h_len);

    let mut seed = Zeroizing::new(vec![0u8; h_len]);
    rng.fill_bytes(&mut seed);

    let db_mask = mgf1::<MGD>(&seed, em_len - h_len)?;
    let masked_db = Zeroizing::new(xor(&db, &db_mask)?);

    let seed_mask = mgf1::<MGD>(&masked_db, h_len)?;
    let masked_seed = Zeroizing::new(xor(&seed, &seed_mask)?);

    let mut em = Zeroizing::new(Vec::with_capacity(em_len));
    em.extend_from_slice(&masked_seed);
    em.extend_from_slice(&masked_db);

    Ok(em)
}

/// Removes EME-OAEP encoding from `em` and returns the message.
///
/// All failures return [`Error::Decoding`]. The label hash and the separator
/// search are evaluated in constant time and combined before the single
/// branch on validity.
pub(crate) fn oaep_decode<D, MGD>(em: &[u8], label: &[u8]) -> Result<Vec<u8>>
where
    D: Digest,
    MGD: Digest,
{
    let h_len = <D as Digest>::output_size();

    if em.len() < 2 * h_len + 1 {
        return Err(Error::Decoding);
    }

    if label.len() as u64 > MAX_LABEL_LEN {
        return Err(Error::Decoding);
    }

    let (masked_seed, masked_db) = em.split_at(h_len);

    let seed_mask = mgf1::<MGD>(masked_db, h_len).map_err(|_| Error::Decoding)?;
    let seed = Zeroizing::new(xor(masked_seed, &seed_mask).map_err(|_| Error::Decoding)?);

    let db_mask = mgf1::<MGD>(&seed, masked_db.len()).map_err(|_| Error::Decoding)?;
    let db = Zeroizing::new(xor(masked_db, &db_mask).map_err(|_| Error::Decoding)?);

    let expected_p_hash = D::digest(label);
    let hash_are_equal = db[0..h_len].ct_eq(expected_p_hash.as_slice());

    // Everything after pHash up to the first 0x01 is padding.
    //   looking_for_index: 1 if we are still looking for the 0x01
    //   index: the offset of the first 0x01 byte
    let mut looking_for_index = Choice::from(1u8);
    let mut index = 0u32;

    for (i, el) in db.iter().enumerate().skip(h_len) {
        let equals1 = el.ct_eq(&1u8);
        index.conditional_assign(&(i as u32), looking_for_index & equals1);
        looking_for_index &= !equals1;
    }

    let valid = hash_are_equal & !looking_for_index;
    if valid.unwrap_u8() != 1 {
        return Err(Error::Decoding);
    }

    Ok(db[index as usize + 1..].to_vec())
}
