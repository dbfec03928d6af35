//! Input/output formats at the edges of the system.

pub mod json;
