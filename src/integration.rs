//! Integration layer
//!
//! Wires the store, the pagination effect and the presentation together.

pub mod app_runner;

pub use app_runner::AppRunner;
