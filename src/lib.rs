#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo_small.png")]
#![warn(missing_docs)]

//! # Supported encoding methods
//!
//! This crate implements the encryption encoding methods described in
//! [RFC2437]:
//!
//! - [EME-OAEP](#eme-oaep)
//! - [EME-PKCS1-v1_5](#eme-pkcs1-v1_5)
//!
//! An encoding method turns a message into an encoded message (EM) of
//! `k - 1` octets, where `k` is the length of the RSA modulus in octets. The
//! EM is the input of the RSA encryption primitive, which is not part of this
//! crate. Decoding reverses the transform and rejects malformed input with a
//! single, uninformative [`Error::Decoding`].
//!
//! # Usage
//!
//! ## EME-OAEP
//!
//! Note: requires `sha1` feature of `rsa-eme` crate is enabled.
//!
#![cfg_attr(feature = "sha1", doc = "```")]
#![cfg_attr(not(feature = "sha1"), doc = "```ignore")]
//! use rsa_eme::{traits::EncodingScheme, Sha1Oaep};
//!
//! let mut rng = rand::thread_rng(); // rand@0.8
//!
//! let bits = 1024;
//! let padding = Sha1Oaep::new();
//!
//! // Encode
//! let data = b"hello world";
//! let em = padding.encode(&mut rng, &data[..], bits).expect("failed to encode");
//! assert_eq!(em.len(), bits / 8 - 1);
//!
//! // Decode
//! let dec_data = padding.decode(&em).expect("failed to decode");
//! assert_eq!(&data[..], &dec_data[..]);
//! ```
//!
//! Any [`digest::Digest`] can stand in for SHA-1, and the MGF1 hash can be
//! chosen separately from the label hash:
//!
//! ```
//! use rsa_eme::{traits::EncodingScheme, Oaep};
//! use sha2::{Sha256, Sha512};
//!
//! let mut rng = rand::thread_rng(); // rand@0.8
//!
//! let padding = Oaep::<Sha512, Sha256>::new_with_label("session key");
//! let em = padding.encode(&mut rng, b"hello world", 4096).expect("failed to encode");
//! assert_eq!(padding.decode(&em).expect("failed to decode"), b"hello world");
//! ```
//!
//! ## EME-PKCS1-v1_5
//! ```
//! use rsa_eme::{traits::EncodingScheme, Pkcs1v15Encrypt};
//!
//! let mut rng = rand::thread_rng(); // rand@0.8
//!
//! let bits = 2048;
//!
//! // Encode
//! let data = b"hello world";
//! let em = Pkcs1v15Encrypt.encode(&mut rng, &data[..], bits).expect("failed to encode");
//! assert_eq!(em[0], 0x02);
//!
//! // Decode, checking the length against the key size first
//! let dec_data = Pkcs1v15Encrypt.decode_for_key(&em, bits).expect("failed to decode");
//! assert_eq!(&data[..], &dec_data[..]);
//! ```
//!
//! # Logging
//!
//! Encoding and decoding calls are reported through the [`log`] facade:
//! accepted calls at `trace` level, rejected calls at `debug` level. Records
//! never contain message, seed, mask or padding octets, and every decoding
//! failure of a method is logged with the same text.
//!
//! [RFC2437]: https://datatracker.ietf.org/doc/html/rfc2437#section-9.1

#[macro_use]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub use digest;
pub use rand_core;

mod algorithms;
pub mod errors;
pub mod hazmat;
pub mod oaep;
pub mod pkcs1v15;
pub mod traits;

#[cfg(feature = "sha1")]
pub use sha1;
#[cfg(feature = "sha2")]
pub use sha2;

pub use crate::{
    errors::{EncodingError, Error, Result},
    oaep::Oaep,
    pkcs1v15::Pkcs1v15Encrypt,
};

/// EME-OAEP with SHA-1 for both the label hash and MGF1, the RFC 2437
/// default.
#[cfg(feature = "sha1")]
pub type Sha1Oaep = Oaep<sha1::Sha1>;
