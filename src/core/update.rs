use crate::core::{
    msg::Msg,
    state::{calc_page, AppState},
};

/// Elm-like update function
/// Returns the next snapshot from a copy of the current one and a message
pub fn update(msg: Msg, mut state: AppState) -> AppState {
    match msg {
        Msg::NextPage => {
            state.offset = state.offset.saturating_add(state.limit);
            state.page = calc_page(state.limit, state.offset);
            state
        }

        Msg::PrevPage => {
            // Retreating past the first page is a silent no-op
            if let Some(offset) = state.offset.checked_sub(state.limit) {
                state.offset = offset;
                state.page = calc_page(state.limit, state.offset);
            }
            state
        }

        Msg::SetPokemonUrls(urls) => {
            state.pokemon_urls = urls;
            state
        }

        Msg::SetPokemons(pokemons) => {
            state.pokemons = pokemons;
            state
        }

        Msg::SetLoading(loading) => {
            state.loading = loading;
            state
        }

        Msg::SetTotalPage(total) => {
            state.total_page = Some(total);
            state
        }

        Msg::IncreaseCounter(value) => {
            state.counter = state.counter.saturating_add(value);
            state
        }

        Msg::DecreaseCounter(value) => {
            state.counter = state.counter.saturating_sub(value);
            state
        }
    }
}
