//! Task and collection management.
//!
//! Requests flow from the delivery layer through validation and the
//! orchestration services into the store ports. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Field validation rules in [`validation`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
