//! Summit ideas API server library.
//!
//! Exposes the building blocks (config, state, services, error handling,
//! routes) so integration tests and the binary entrypoint can both access
//! them.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod kanban;
pub mod query;
pub mod router;
pub mod routes;
pub mod settings;
pub mod state;
pub mod submission;
pub mod voting;
