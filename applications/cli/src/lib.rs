//! Tilawah CLI - terminal front-end for the reading tracker
pub mod config;
pub mod error;
pub mod recite;
pub mod render;
