//! Application layer: the per-transaction entry mapping and the batch
//! reconciliation engine that drives it.

pub mod engine;
pub mod mapper;
