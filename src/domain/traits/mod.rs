//! Domain traits - Capability abstractions for infrastructure implementations

pub mod movable;
pub mod sender;
pub mod store;

pub use movable::Movable;
pub use sender::MessageSender;
pub use store::UserStore;
