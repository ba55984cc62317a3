//! Infrastructure layer
//!
//! This module handles external integrations:
//! - CLI argument processing and configuration files
//! - HTTP access and the PokeAPI gateway
//! - Terminal setup and input events

pub mod catalog;
pub mod cli;
pub mod config;
pub mod http;
pub mod tui;
