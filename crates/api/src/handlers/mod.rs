pub mod form_field_options;
pub mod form_fields;
pub mod idea_dynamic_fields;
pub mod ideas;
pub mod kanban;
pub mod settings;
pub mod statistics;
pub mod submissions;
pub mod summit_resources;
pub mod votes;
