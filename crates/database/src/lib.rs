//! # Database Crate
//!
//! The read-only adapter in front of the MySQL server that holds the
//! `app_versions` table.
//!
//! ## Public API
//!
//! - `connect`: opens a single TLS-required connection from resolved
//!   `ConnectionParams`.
//! - `VersionRepository`: owns that connection for one fetch and returns the
//!   whole table, ordered by `id`.
//! - `DbError`: the error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod repository;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{connect, connect_options};
pub use error::DbError;
pub use repository::{VersionRepository, SELECT_ALL_VERSIONS};
