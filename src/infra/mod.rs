//! Infrastructure - configuration
//!
//! This module contains infrastructure concerns:
//! - `config` - API credential and service endpoints

pub mod config;

// Re-export commonly used types
pub use config::Config;
