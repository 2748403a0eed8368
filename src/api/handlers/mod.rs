//! Request handlers for the task and collection resources.

pub mod collections;
pub mod tasks;
