// ABOUTME: Persisted workspace state surface.
// ABOUTME: Key names plus in-memory and JSON-file key-value stores.

pub mod keys;
mod store;

pub use store::{FileStore, MemoryStore, StateStore, StoreError};
