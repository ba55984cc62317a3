//! Status bar component
//!
//! Bottom line with the loading spinner and the key bindings.

use ratatui::{prelude::*, widgets::*};

use crate::presentation::widgets::SpinnerWidget;

const HELP: &str = "h/← prev  l/→ next  +/- counter  q quit";

#[derive(Debug, Clone, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    /// `tick` advances the spinner animation
    pub fn view(&self, loading: bool, tick: usize, frame: &mut Frame, area: Rect) {
        let layout = Layout::new(
            Direction::Horizontal,
            [Constraint::Length(12), Constraint::Min(0)],
        )
        .split(area);

        frame.render_widget(Clear, area);
        frame.render_widget(SpinnerWidget::new(loading, tick), layout[0]);
        let help = Paragraph::new(Span::styled(HELP, Style::default().fg(Color::Gray).italic()))
            .alignment(Alignment::Right);
        frame.render_widget(help, layout[1]);
    }
}
