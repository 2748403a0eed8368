//! Adapter implementations for task and collection ports.

pub mod memory;
pub mod postgres;
