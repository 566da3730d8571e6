//! Application configuration module
//!
//! Server settings come from the environment (`.env` supported);
//! fixed values live in `constants`.

mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;
