//! NASA image-search API client and response normalization.

pub mod client;
pub mod normalize;
