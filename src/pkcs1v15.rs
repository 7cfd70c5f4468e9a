//! EME-PKCS1-v1_5 encoding as described in [RFC 2437 § 9.1.2].
//!
//! # Usage
//!
//! See [code example in the toplevel rustdoc](../index.html#eme-pkcs1-v1_5).
//!
//! [RFC 2437 § 9.1.2]: https://datatracker.ietf.org/doc/html/rfc2437#section-9.1.2

use alloc::vec::Vec;
use log::{debug, trace};
use rand_core::CryptoRngCore;
use zeroize::Zeroizing;

use crate::algorithms::pkcs1v15::*;
use crate::errors::Result;
use crate::traits::EncodingScheme;

/// Encoding using PKCS#1 v1.5 padding.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Pkcs1v15Encrypt;

impl EncodingScheme for Pkcs1v15Encrypt {
    fn encode<R: CryptoRngCore + ?Sized>(
        &self,
        rng: &mut R,
        msg: &[u8],
        key_bits: usize,
    ) -> Result<Zeroizing<Vec<u8>>> {
        let res = pkcs1v15_encode(rng, msg, key_bits);
        match &res {
            Ok(_) => trace!("PKCS1-v1_5: encoded for {} bit key", key_bits),
            Err(err) => debug!("PKCS1-v1_5: encoding for {} bit key failed: {}", key_bits, err),
        }
        res
    }

    fn decode(&self, em: &[u8]) -> Result<Vec<u8>> {
        let res = pkcs1v15_decode(em);
        if res.is_err() {
            debug!("PKCS1-v1_5: decoding error");
        }
        res
    }

    fn max_message_len(&self, key_bits: usize) -> Option<usize> {
        pkcs1v15_max_message_len(key_bits)
    }
}
