//! Application layer - Use case implementations
//!
//! This module applies the scalar domain operations to whole batches of values.

pub mod batch;
