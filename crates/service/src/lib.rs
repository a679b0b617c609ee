//! Service layer for the portfolio collections.
//! - `storage`: flat-file JSON array persistence behind the `CollectionStore` trait.
//! - `collections`: the closed set of collections the API exposes.
//! - `collection_service`: load/append/persist composed into list and create.

pub mod errors;
pub mod collections;
pub mod runtime;
pub mod storage;
pub mod file;
pub mod collection_service;

pub use collection_service::CollectionService;
pub use collections::CollectionKind;
