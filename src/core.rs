//! Core state management
//!
//! This module contains the state container and the effects that feed it:
//! - Application state and action messages
//! - Pure reducers and the snapshot store
//! - Derived views
//! - Loading tracking and the pagination effect
//! - Key translation

pub mod effect;
pub mod loading;
pub mod msg;
pub mod state;
pub mod store;
pub mod translator;
pub mod update;
pub mod view;
