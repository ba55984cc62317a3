use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Widget};

const FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Loading indicator; renders nothing while idle
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpinnerWidget {
    loading: bool,
    tick: usize,
}

impl SpinnerWidget {
    pub fn new(loading: bool, tick: usize) -> Self {
        Self { loading, tick }
    }

    pub fn frame(&self) -> &'static str {
        FRAMES[self.tick % FRAMES.len()]
    }
}

impl Widget for SpinnerWidget {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        if !self.loading {
            return;
        }
        let line = Line::from(vec![
            Span::styled(self.frame(), Style::default().fg(Color::Yellow)),
            Span::raw(" loading"),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(widget: SpinnerWidget) -> String {
        let area = Rect::new(0, 0, 20, 1);
        let mut buffer = Buffer::empty(area);
        widget.render(area, &mut buffer);
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_idle_renders_nothing() {
        assert_eq!(render(SpinnerWidget::new(false, 3)).trim(), "");
    }

    #[test]
    fn test_loading_renders_frame() {
        let content = render(SpinnerWidget::new(true, 9));
        assert!(content.contains("loading"));
        assert!(content.starts_with(FRAMES[1]));
    }
}
