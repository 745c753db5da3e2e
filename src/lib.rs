//! scanclean - scanned page cleanup
//!
//! Flattens paper background to white, boosts ink contrast and wraps the
//! result as the single page of a PDF.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
