//! Supported encoding methods.

use alloc::vec::Vec;

use rand_core::CryptoRngCore;
use zeroize::Zeroizing;

use crate::algorithms::octets::encoded_len;
use crate::errors::{Error, Result};

/// Encoding method for RSA encryption.
///
/// Implementations turn a message into an encoded message (EM) of
/// `key_bits / 8 - 1` octets and back.
pub trait EncodingScheme {
    /// Encode `msg` for a modulus of `key_bits` bits, drawing randomness from
    /// `rng`.
    fn encode<R: CryptoRngCore + ?Sized>(
        &self,
        rng: &mut R,
        msg: &[u8],
        key_bits: usize,
    ) -> Result<Zeroizing<Vec<u8>>>;

    /// Remove the encoding from `em` and return the message.
    ///
    /// Every failure is reported as [`Error::Decoding`].
    fn decode(&self, em: &[u8]) -> Result<Vec<u8>>;

    /// Longest message [`EncodingScheme::encode`] accepts for `key_bits`, or
    /// `None` if the key is too small for any message.
    fn max_message_len(&self, key_bits: usize) -> Option<usize>;

    /// Like [`EncodingScheme::decode`], but first checks that `em` has
    /// exactly the length of an encoding for `key_bits`.
    fn decode_for_key(&self, em: &[u8], key_bits: usize) -> Result<Vec<u8>> {
        match encoded_len(key_bits) {
            Some(em_len) if em_len == em.len() => self.decode(em),
            _ => Err(Error::Decoding),
        }
    }
}
