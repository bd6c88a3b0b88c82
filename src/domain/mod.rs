//! Domain layer - Core business objects with no external dependencies
//!
//! This layer contains:
//! - Entities: Core business objects (User, the bird variants)
//! - Traits: Capability abstractions (MessageSender, Movable, UserStore)

pub mod entities;
pub mod traits;
