use std::sync::Arc;

use crate::domain::{Pokemon, PokemonUrl};

pub const DEFAULT_LIMIT: u32 = 10;

/// Unified application state
///
/// A snapshot is never mutated once published; reducers work on a copy.
/// Lists are shared so copying a snapshot does not copy the records.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub limit: u32,
    pub offset: u32,
    pub page: u32,
    pub total_page: Option<u32>,
    pub pokemon_urls: Arc<[PokemonUrl]>,
    pub pokemons: Arc<[Pokemon]>,
    pub loading: bool,
    pub counter: i64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT)
    }
}

impl AppState {
    /// Initialize AppState on the first page with the given page size
    pub fn new(limit: u32) -> Self {
        let limit = limit.max(1);
        Self {
            limit,
            offset: 0,
            page: calc_page(limit, 0),
            total_page: None,
            pokemon_urls: Arc::from(Vec::new()),
            pokemons: Arc::from(Vec::new()),
            loading: false,
            counter: 0,
        }
    }

    pub fn is_first_page(&self) -> bool {
        self.offset == 0
    }

    pub fn is_last_page(&self) -> bool {
        self.total_page.is_some_and(|total| self.page >= total)
    }
}

/// 1-based page number for an offset
pub fn calc_page(limit: u32, offset: u32) -> u32 {
    offset / limit.max(1) + 1
}
