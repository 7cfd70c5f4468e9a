//! Encoding-related trait definitions.

mod padding;

pub use padding::EncodingScheme;
