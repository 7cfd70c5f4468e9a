//! EME-OAEP encoding as described in [RFC 2437 § 9.1.1].
//!
//! # Usage
//!
//! See [code example in the toplevel rustdoc](../index.html#eme-oaep).
//!
//! [RFC 2437 § 9.1.1]: https://datatracker.ietf.org/doc/html/rfc2437#section-9.1.1

use alloc::vec::Vec;
use core::fmt;
use core::marker::PhantomData;

use digest::Digest;
use log::{debug, trace};
use rand_core::CryptoRngCore;
use zeroize::Zeroizing;

use crate::algorithms::oaep::*;
use crate::errors::Result;
use crate::traits::EncodingScheme;

/// EME-OAEP encoding method.
///
/// - `D` hashes the label. The maximum possible message length is
///   `m = k - 2 * h_len - 2`, where `k` is the size of the RSA modulus in
///   octets.
/// - `MGD` specifies the hash function used by the mask generation function
///   [MGF1](https://datatracker.ietf.org/doc/html/rfc2437#section-10.2.1).
/// - the optional label (`P` in RFC 2437) is associated with every message
///   encoded or decoded through [`EncodingScheme`]. It is empty by default.
///
/// The two hash functions can, but don't need to be the same.
pub struct Oaep<D, MGD = D>
where
    D: Digest,
    MGD: Digest,
{
    label: Option<Vec<u8>>,
    h_len: usize,
    phantom: PhantomData<fn() -> (D, MGD)>,
}

impl<D, MGD> Oaep<D, MGD>
where
    D: Digest,
    MGD: Digest,
{
    /// Create a new OAEP encoding with an empty label.
    ///
    /// # Example
    /// ```
    /// use rsa_eme::{traits::EncodingScheme, Oaep};
    /// use sha2::Sha256;
    ///
    /// let mut rng = rand::thread_rng();
    /// let oaep = Oaep::<Sha256>::new();
    /// let em = oaep.encode(&mut rng, b"secret", 2048).unwrap();
    /// assert_eq!(em.len(), 255);
    /// ```
    pub fn new() -> Self {
        Self {
            label: None,
            h_len: <D as Digest>::output_size(),
            phantom: PhantomData,
        }
    }

    /// Create a new OAEP encoding with an associated `label`.
    pub fn new_with_label<L: AsRef<[u8]>>(label: L) -> Self {
        Self {
            label: Some(label.as_ref().to_vec()),
            ..Self::new()
        }
    }

    /// Output size of `D` in octets, `hLen` in RFC 2437.
    pub fn hash_len(&self) -> usize {
        self.h_len
    }

    /// The configured label, if any.
    pub fn label(&self) -> Option<&[u8]> {
        self.label.as_deref()
    }

    /// Encode `msg` with an explicit `label`, ignoring the configured one.
    pub fn encode_with_label<R: CryptoRngCore + ?Sized>(
        &self,
        rng: &mut R,
        msg: &[u8],
        label: &[u8],
        key_bits: usize,
    ) -> Result<Zeroizing<Vec<u8>>> {
        match oaep_encode::<R, D, MGD>(rng, msg, label, key_bits) {
            Ok(em) => {
                trace!("EME-OAEP: encoded for {} bit key, hLen {}", key_bits, self.h_len);
                Ok(em)
            }
            Err(err) => {
                debug!("EME-OAEP: encoding for {} bit key failed: {}", key_bits, err);
                Err(err)
            }
        }
    }

    /// Decode `em` with an explicit `label`, ignoring the configured one.
    pub fn decode_with_label(&self, em: &[u8], label: &[u8]) -> Result<Vec<u8>> {
        let res = oaep_decode::<D, MGD>(em, label);
        if res.is_err() {
            debug!("EME-OAEP: decoding error");
        } else {
            trace!("EME-OAEP: decoded {} octets, hLen {}", em.len(), self.h_len);
        }
        res
    }

    fn label_bytes(&self) -> &[u8] {
        self.label.as_deref().unwrap_or_default()
    }
}

impl<D, MGD> EncodingScheme for Oaep<D, MGD>
where
    D: Digest,
    MGD: Digest,
{
    fn encode<R: CryptoRngCore + ?Sized>(
        &self,
        rng: &mut R,
        msg: &[u8],
        key_bits: usize,
    ) -> Result<Zeroizing<Vec<u8>>> {
        self.encode_with_label(rng, msg, self.label_bytes(), key_bits)
    }

    fn decode(&self, em: &[u8]) -> Result<Vec<u8>> {
        self.decode_with_label(em, self.label_bytes())
    }

    fn max_message_len(&self, key_bits: usize) -> Option<usize> {
        oaep_max_message_len(self.h_len, key_bits)
    }
}

impl<D, MGD> Default for Oaep<D, MGD>
where
    D: Digest,
    MGD: Digest,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<D, MGD> Clone for Oaep<D, MGD>
where
    D: Digest,
    MGD: Digest,
{
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            h_len: self.h_len,
            phantom: PhantomData,
        }
    }
}

impl<D, MGD> fmt::Debug for Oaep<D, MGD>
where
    D: Digest,
    MGD: Digest,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Oaep")
            .field("h_len", &self.h_len)
            .field("label", &self.label)
            .finish()
    }
}
