//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod animal_repo;
pub mod role_repo;
pub mod session_repo;
pub mod user_repo;
pub mod visit_repo;
pub mod volunteer_repo;

pub use animal_repo::AnimalRepo;
pub use role_repo::RoleRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
pub use visit_repo::VisitRepo;
pub use volunteer_repo::VolunteerRepo;
