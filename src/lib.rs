//! SOLID exercise kata: three self-contained examples of capability-based
//! design
//!
//! - Messaging: `Notifier` depends on the `MessageSender` capability, not
//!   on a concrete channel (dependency inversion).
//! - Movement: every `Movable` variant honors the full contract; no
//!   variant fails a method it claims to support (Liskov substitution).
//! - Persistence: `User` holds data, `UserRecordStore` saves it (single
//!   responsibility).

pub mod application;
pub mod domain;
pub mod infrastructure;
