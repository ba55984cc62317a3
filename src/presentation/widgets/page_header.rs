use ratatui::prelude::*;
use ratatui::widgets::{Block, Widget};

/// Page indicator with the legacy counter on the right
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageHeaderWidget {
    page: u32,
    total_page: Option<u32>,
    counter: i64,
}

impl PageHeaderWidget {
    pub fn new(page: u32, total_page: Option<u32>, counter: i64) -> Self {
        Self {
            page,
            total_page,
            counter,
        }
    }

    pub fn page_text(&self) -> String {
        match self.total_page {
            Some(total) => format!("page {}/{}", self.page, total),
            None => format!("page {}", self.page),
        }
    }
}

impl Widget for PageHeaderWidget {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let counter = format!("counter: {}", self.counter);
        let block = Block::default()
            .title_top(Line::from(self.page_text().bold()).left_aligned())
            .title_top(Line::from(counter.dim()).right_aligned());
        block.render(area, buf);
    }
}
