//! ArchSense Library
//!
//! This library synthesizes residential floor plans: a fixed seven-room
//! topology sized to a site, furnished from a built-in catalog, and projected
//! into a 3D scene document and a 2D plan-editor document.

// Module declarations
pub mod catalog;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod models;
pub mod services;

#[cfg(feature = "web")]
pub mod web;

pub use error::{LayoutError, Result};
