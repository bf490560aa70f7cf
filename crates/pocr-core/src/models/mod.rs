//! Data models for passport extraction.

pub mod config;
pub mod record;
