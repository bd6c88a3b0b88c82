//! Domain entities - Core business objects with no external dependencies

pub mod bird;
pub mod user;

pub use bird::{Duck, Penguin};
pub use user::User;
