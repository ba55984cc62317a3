use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Widget};

use crate::domain::{Pokemon, PokemonUrl};

/// Names from the current page listing
#[derive(Debug, Clone, Default)]
pub struct ReferenceListWidget<'a> {
    references: &'a [PokemonUrl],
}

impl<'a> ReferenceListWidget<'a> {
    pub fn new(references: &'a [PokemonUrl]) -> Self {
        Self { references }
    }
}

impl<'a> Widget for ReferenceListWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let items: Vec<ListItem> = self
            .references
            .iter()
            .map(|r| ListItem::new(r.name.as_str()))
            .collect();
        let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Listing"));
        Widget::render(list, area, buf);
    }
}

/// Resolved detail records
#[derive(Debug, Clone, Default)]
pub struct PokemonListWidget<'a> {
    pokemons: &'a [Pokemon],
}

impl<'a> PokemonListWidget<'a> {
    pub fn new(pokemons: &'a [Pokemon]) -> Self {
        Self { pokemons }
    }

    pub fn row(pokemon: &Pokemon) -> Line<'_> {
        let mut spans = vec![
            Span::styled(format!("#{:<4}", pokemon.id), Style::default().fg(Color::Gray)),
            Span::styled(pokemon.name.as_str(), Style::default().bold()),
        ];
        let types = pokemon.type_names();
        if !types.is_empty() {
            spans.push(Span::raw(format!(" [{}]", types.join("/"))));
        }
        if let Some(image) = pokemon.image_url() {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(image, Style::default().fg(Color::Cyan).underlined()));
        }
        Line::from(spans)
    }
}

impl<'a> Widget for PokemonListWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let items: Vec<ListItem> = self
            .pokemons
            .iter()
            .map(|p| ListItem::new(Self::row(p)))
            .collect();
        let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Details"));
        Widget::render(list, area, buf);
    }
}
