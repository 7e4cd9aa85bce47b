//! Utility functions for identifier generation, URL checks, and cookie handling.
//!
//! This module provides helper functions used across the application:
//!
//! - [`tracking_id`] - Tracking identifier generation
//! - [`destination_url`] - Destination URL validation
//! - [`data_uri`] - Data URI prefix stripping for stored images
//! - [`cookies`] - Session and OAuth cookie building and parsing
//! - [`password`] - Password hashing and verification

pub mod cookies;
pub mod data_uri;
pub mod destination_url;
pub mod password;
pub mod tracking_id;
