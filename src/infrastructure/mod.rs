//! Port implementations that do not reach the external services.

pub mod in_memory;
