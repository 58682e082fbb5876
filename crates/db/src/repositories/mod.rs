//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod plan_repo;
pub mod site_repo;
pub mod template_repo;
pub mod user_repo;

pub use plan_repo::PlanRepo;
pub use site_repo::SiteRepo;
pub use template_repo::TemplateRepo;
pub use user_repo::UserRepo;
