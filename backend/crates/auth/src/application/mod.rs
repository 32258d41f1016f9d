//! Application Layer - Use Cases

pub mod config;
pub mod sign_in;
pub mod sign_up;
pub mod token;

pub use config::AuthConfig;
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_up::{SignUpInput, SignUpOutput, SignUpUseCase};
pub use token::{Claims, TokenIdentity, TokenService};
