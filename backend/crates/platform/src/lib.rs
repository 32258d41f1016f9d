//! Platform - domain-independent primitives
//!
//! Cryptographic building blocks shared by the feature crates. Nothing in
//! here knows about HTTP, the database, or any particular domain.

pub mod password;
