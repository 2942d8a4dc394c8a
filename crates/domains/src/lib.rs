//! Core domain logic for the forum API: entities, read models, port traits
//! and the error taxonomy shared by every adapter crate.

pub mod entities;
pub mod error;
pub mod models;
pub mod ports;

// Re-exporting for easier access in other crates
pub use entities::*;
pub use error::*;
pub use models::*;
pub use ports::*;
