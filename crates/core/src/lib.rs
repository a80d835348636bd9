//! Domain logic for the summit ideas service.
//!
//! Everything in this crate is pure: no database access and no HTTP. The
//! storage and API crates build on these types.

pub mod error;
pub mod form;
pub mod kanban;
pub mod naming;
pub mod types;
pub mod voting;
