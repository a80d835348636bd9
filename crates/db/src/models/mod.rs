//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! JSON uses camelCase keys to match the browser client.

pub mod form_field;
pub mod idea;
pub mod idea_dynamic_field;
pub mod kanban_category;
pub mod setting;
pub mod summit_resource;
pub mod vote;
