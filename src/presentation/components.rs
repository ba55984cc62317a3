//! Stateless components composed from widgets

pub mod home;
pub mod status_bar;

pub use home::{HomeComponent, HomeData};
pub use status_bar::StatusBarComponent;
