//! Home component
//!
//! Shows the page header, the listing of the current page and the resolved
//! detail records side by side.

use std::sync::Arc;

use ratatui::prelude::*;

use crate::{
    core::store::Views,
    domain::{Pokemon, PokemonUrl},
    presentation::widgets::{PageHeaderWidget, PokemonListWidget, ReferenceListWidget},
};

/// Values the home screen renders
#[derive(Debug, Clone, PartialEq)]
pub struct HomeData {
    pub page: u32,
    pub total_page: Option<u32>,
    pub counter: i64,
    pub pokemon_urls: Arc<[PokemonUrl]>,
    pub pokemons: Arc<[Pokemon]>,
    pub loading: bool,
}

impl HomeData {
    /// Read the latest value of every view the screen depends on
    pub fn from_views(views: &Views) -> Self {
        Self {
            page: views.page.get(),
            total_page: views.total_page.get(),
            counter: views.counter.get(),
            pokemon_urls: views.pokemon_urls.get(),
            pokemons: views.pokemons.get(),
            loading: views.loading.get(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct HomeComponent;

impl HomeComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, data: &HomeData, frame: &mut Frame, area: Rect) {
        let rows = Layout::new(
            Direction::Vertical,
            [Constraint::Length(1), Constraint::Min(0)],
        )
        .split(area);
        let columns = Layout::new(
            Direction::Horizontal,
            [Constraint::Percentage(30), Constraint::Percentage(70)],
        )
        .split(rows[1]);

        frame.render_widget(
            PageHeaderWidget::new(data.page, data.total_page, data.counter),
            rows[0],
        );
        frame.render_widget(ReferenceListWidget::new(&data.pokemon_urls), columns[0]);
        frame.render_widget(PokemonListWidget::new(&data.pokemons), columns[1]);
    }
}
