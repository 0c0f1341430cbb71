//! Resource lifecycle implementations, one per provider.

pub mod aws;
