//! Useful algorithms related to RSA encoding methods.

pub(crate) mod mgf;
pub(crate) mod oaep;
pub(crate) mod octets;
pub(crate) mod pkcs1v15;
