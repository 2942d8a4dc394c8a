//! Storage adapters implementing the `domains` persistence ports.

mod id;

#[cfg(feature = "db-postgres")]
pub mod postgres;

pub(crate) use id::generate_id;
