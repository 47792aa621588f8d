//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the reference site footprint.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "ArchSense";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "archsense";

/// Width of the site the fixed topology was drawn for (mm).
pub const REFERENCE_SITE_WIDTH_MM: u32 = 10_000;

/// Depth of the site the fixed topology was drawn for (mm).
pub const REFERENCE_SITE_DEPTH_MM: u32 = 15_000;

/// Height of every wall segment (mm).
pub const WALL_HEIGHT_MM: u32 = 3000;

/// Thickness of every wall segment (mm).
pub const WALL_THICKNESS_MM: u32 = 200;

/// Height of every door opening (mm).
pub const DOOR_HEIGHT_MM: u32 = 2100;

/// Width of every door opening (mm).
pub const DOOR_WIDTH_MM: u32 = 900;

/// Frame depth of every window (mm).
pub const WINDOW_DEPTH_MM: u32 = 100;
