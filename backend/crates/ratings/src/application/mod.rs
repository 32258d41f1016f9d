//! Application Layer - Use Cases

pub mod list_ratings;
pub mod submit_rating;

pub use list_ratings::{ListRatingsInput, ListRatingsUseCase};
pub use submit_rating::{SubmitRatingInput, SubmitRatingUseCase};
