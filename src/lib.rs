//! Tasks service: a CRUD REST service for tasks and collections of tasks.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: Concrete implementations of ports (`PostgreSQL`, in-memory)
//!
//! # Modules
//!
//! - [`task`]: Validation, orchestration, and persistence of tasks and
//!   collections
//! - [`api`]: HTTP delivery layer (routing, basic auth, probes)
//! - [`config`]: Environment-driven configuration
//! - [`telemetry`]: Tracing subscriber setup

pub mod api;
pub mod config;
pub mod task;
pub mod telemetry;
