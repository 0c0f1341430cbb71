pub mod document;
pub mod object_store;
pub mod stream;
