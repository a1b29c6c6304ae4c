pub mod config;
pub mod error;

// Core: recipe collection and queries
pub mod store;

// JSON API and routing
pub mod api;

// HTML front-end
pub mod web;

// CLI
pub mod cli;

// Utilities
pub mod utils;

// Re-exports
pub use config::Settings;
pub use error::{Error, Result};
pub use store::{PageResult, Recipe, RecipeStore};
