//! Infrastructure layer - Concrete implementations of the domain traits

pub mod config;
pub mod senders;
pub mod storage;
