//! roster-store: Storage layer for the Roster student records service
//!
//! This crate provides:
//! - The `StudentRepository` trait handlers depend on
//! - `Store`, a PostgreSQL implementation via sqlx
//! - `MemoryStore`, an in-process implementation for tests and local runs
//! - Bootstrap DDL for the `students` table
//!
//! # Usage
//!
//! ```rust,ignore
//! use roster_store::{Store, StoreConfig, StudentRepository};
//!
//! let config = StoreConfig::from_env()?;
//! let store = Store::connect(config).await?;
//!
//! let student = store.insert_student(&NewStudent::new("Ann", "S001", true)).await?;
//! let all = store.list_students().await?;
//! ```

pub mod error;
pub mod memory;
pub mod models;
pub mod repository;
pub mod schema;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use models::StudentRow;
pub use repository::StudentRepository;
pub use store::{Store, StoreConfig};

// Re-export roster-core for downstream crates
pub use roster_core;
