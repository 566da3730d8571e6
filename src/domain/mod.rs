//! Domain layer - Core business entities
//!
//! Records held by the entity stores, their create/update inputs and the
//! client-facing user projection. Nothing here knows about storage or HTTP.

pub mod entity;
pub mod product;
pub mod user;

pub use entity::Entity;
pub use product::{CreateProduct, Product, UpdateProduct};
pub use user::{CreateUser, UpdateUser, User, UserResponse};
