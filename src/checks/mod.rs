//! The scripted sequences the check binaries run, one module per service.
//!
//! Every sequence is written against the client trait rather than the AWS
//! implementation so it can be exercised against mocks.

pub mod document;
pub mod object_store;
pub mod stream;
