//! Presentation layer
//!
//! This module contains UI components and widgets:
//! - Stateless components rendering derived view values
//! - Reusable widgets
//! - Layout of the home screen

pub mod components;
pub mod widgets;

use ratatui::prelude::*;

use crate::infrastructure::tui::Frame;
use components::{HomeComponent, HomeData, StatusBarComponent};

/// Render the whole screen
pub fn render(frame: &mut Frame, data: &HomeData, tick: usize) {
    let layout = Layout::new(
        Direction::Vertical,
        [Constraint::Min(0), Constraint::Length(1)],
    )
    .split(frame.area());

    HomeComponent::new().view(data, frame, layout[0]);
    StatusBarComponent::new().view(data.loading, tick, frame, layout[1]);
}
