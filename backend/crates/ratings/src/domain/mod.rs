//! Domain Layer

pub mod entities;
pub mod repository;
pub mod value_objects;

// Re-exports
pub use entities::{Rating, RatingEntry};
pub use repository::RatingRepository;
pub use value_objects::{QueryWindow, RatedDate, Score};
