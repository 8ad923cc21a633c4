//! Configuration and path management for PocketFin

pub mod paths;
pub mod settings;

pub use paths::PocketFinPaths;
pub use settings::{Currency, Settings};
