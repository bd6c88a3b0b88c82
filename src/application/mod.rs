//! Application layer - Use cases and business logic
//!
//! This layer contains:
//! - Services: orchestration on top of the domain capabilities
//! - Errors: domain-specific errors

pub mod errors;
pub mod services;
