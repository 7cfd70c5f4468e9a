//! Mask generation function used by OAEP padding

use alloc::vec::Vec;
use digest::Digest;
use zeroize::Zeroizing;

use super::octets::i2osp;
use crate::errors::{EncodingError, Result};

/// Largest counter MGF1 can encode. RFC 2437 § 10.2.1 step 1.
const MAX_COUNTER: u64 = u32::MAX as u64;

/// Mask generation function MGF1 from [RFC 2437 § 10.2.1].
///
/// Returns exactly `len` octets: the leading octets of
/// `D(seed || I2OSP(0)) || D(seed || I2OSP(1)) || ...`.
///
/// [RFC 2437 § 10.2.1]: https://datatracker.ietf.org/doc/html/rfc2437#section-10.2.1
pub fn mgf1<D: Digest>(seed: &[u8], len: usize) -> Result<Zeroizing<Vec<u8>>> {
    let h_len = <D as Digest>::output_size();

    // The counter runs one past the floor so lengths that are not a multiple
    // of the digest size are still covered.
    let limit = (len / h_len) as u64;
    if limit > MAX_COUNTER {
        return Err(EncodingError::MaskTooLong.into());
    }

    let mut out = Zeroizing::new(Vec::with_capacity((len / h_len + 1) * h_len));
    for counter in 0..=limit {
        let c = i2osp(counter)?;

        let mut digest = D::new();
        Digest::update(&mut digest, seed);
        Digest::update(&mut digest, c);
        out.extend_from_slice(&digest.finalize());
    }

    if out.len() < len {
        return Err(EncodingError::MaskTooLong.into());
    }

    out.truncate(len);
    Ok(out)
}
