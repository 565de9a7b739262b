//! # Album Catalog Common Library
//!
//! Shared code for the album catalog service:
//! - Album record model and validation
//! - Common error type
//! - Configuration loading

pub mod album;
pub mod config;
pub mod error;

pub use album::Album;
pub use error::{Error, Result};
