//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8000;

/// Default tracing filter when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

// =============================================================================
// API
// =============================================================================

/// Title reported by the root endpoint and OpenAPI document
pub const API_TITLE: &str = "Product & User CRUD API";

/// Message returned by the root endpoint
pub const WELCOME_MESSAGE: &str = "Welcome to the Product & User CRUD API";

/// Status reported by the health endpoint
pub const HEALTHY_STATUS: &str = "healthy";

// =============================================================================
// Entity Stores
// =============================================================================

/// First ID handed out by an empty store
pub const FIRST_RECORD_ID: i64 = 1;

/// Entity name used in product error and confirmation messages
pub const ENTITY_PRODUCT: &str = "Product";

/// Entity name used in user error and confirmation messages
pub const ENTITY_USER: &str = "User";
