//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod form_field_option_repo;
pub mod form_field_repo;
pub mod idea_dynamic_field_repo;
pub mod idea_repo;
pub mod kanban_category_repo;
pub mod setting_repo;
pub mod summit_resource_repo;
pub mod vote_repo;

pub use form_field_option_repo::FormFieldOptionRepo;
pub use form_field_repo::FormFieldRepo;
pub use idea_dynamic_field_repo::IdeaDynamicFieldRepo;
pub use idea_repo::IdeaRepo;
pub use kanban_category_repo::KanbanCategoryRepo;
pub use setting_repo::SettingRepo;
pub use summit_resource_repo::SummitResourceRepo;
pub use vote_repo::VoteRepo;
