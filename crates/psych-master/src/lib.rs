//! psych-master library root.
//!
//! The terminal front end lives here rather than in `main.rs` so the page
//! sessions can be driven from integration tests with scripted input.

pub mod app;
pub mod cli;
pub mod pages;
pub mod render;
