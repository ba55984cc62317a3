//! # Pokepager - paged PokeAPI browser
//!
//! A terminal client that pages through the PokeAPI catalog, built with Rust
//! and Ratatui. This library implements an Elm-like architecture for
//! predictable state management.
//!
//! ## Architecture Overview
//!
//! - **Model** (`state`): Immutable application snapshots
//! - **Message** (`msg`): Actions that can change the snapshot
//! - **Update** (`update`): Pure reducers
//! - **Store** (`store`): Holds the snapshot, exposes derived views and named actions
//! - **Effect** (`effect`): Debounced page loading with a shared loading flag
//! - **View** (`presentation`): UI rendering based on derived views
//!
//! ## Example Usage
//!
//! ```rust
//! use pokepager::{update, AppState, Msg};
//!
//! let state = AppState::new(10);
//! let state = update(Msg::NextPage, state);
//!
//! assert_eq!(state.offset, 10);
//! assert_eq!(state.page, 2);
//! ```
//!
//! ## Modules
//!
//! - [`core`] - State, reducers, store, views and effects
//! - [`domain`] - Catalog records
//! - [`infrastructure`] - HTTP, catalog gateway, configuration and terminal
//! - [`integration`] - Application runner
//! - [`presentation`] - UI components and widgets
//! - [`utils`] - Logging, panic handling and paths

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

// Re-exports for convenience
pub use crate::core::{
    msg::Msg,
    state::AppState,
    store::{Actions, Store, Views},
    update::update,
};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;
