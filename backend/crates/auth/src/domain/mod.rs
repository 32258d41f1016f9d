//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

/// Type-safe account identifier (UUID v4 under the hood)
pub type UserId = kernel::id::Id<kernel::id::markers::User>;

// Re-exports
pub use entity::user::User;
pub use repository::UserRepository;
pub use value_object::email::Email;
