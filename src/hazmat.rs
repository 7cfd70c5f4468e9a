//! ⚠️ Low-level "hazmat" encoding primitives.
//!
//! # ☢️️ WARNING: HAZARDOUS API ☢️
//!
//! This module holds the building blocks of the encoding methods: the MGF1
//! mask generation function and the octet string helpers it relies on. They
//! provide no padding and no integrity on their own. They are intended to be
//! used for implementing well-reviewed higher-level constructions.
//!
//! We do NOT recommend using them to implement any algorithm which has not
//! received extensive peer review by cryptographers.

pub use crate::algorithms::mgf::mgf1;
pub use crate::algorithms::octets::{encoded_len, i2osp, xor};
