//! File-backed implementations of the storage traits.

pub mod collection_store;
