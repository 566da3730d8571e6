//! Product & User CRUD API
//!
//! An Axum service exposing create/read/update/delete over two in-memory
//! entity stores, one for products and one for users.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Records, their inputs and the user projection
//! - **infra**: Generic in-memory entity store and sample data
//! - **services**: Application use cases behind mockable traits
//! - **api**: HTTP handlers, extractors and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server on the default port (8000)
//! cargo run -- serve
//!
//! # Bind elsewhere with debug logging
//! cargo run -- --verbose serve --host 127.0.0.1 --port 3000
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::{create_router, AppState};
pub use config::Config;
pub use domain::{Product, User, UserResponse};
pub use errors::{AppError, AppResult};
pub use infra::EntityStore;
