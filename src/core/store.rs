//! Snapshot store, named views and named action emitters

use std::sync::Arc;

use tokio::sync::watch;

use crate::{
    core::{
        msg::Msg,
        state::AppState,
        update::update,
        view::{Distinct, View},
    },
    domain::{Pokemon, PokemonUrl},
};

/// Holds the current [`AppState`] snapshot and applies messages to it
///
/// Cloning a `Store` yields another handle to the same snapshot. The snapshot
/// is dropped, and every view subscription ends, once all handles are gone.
#[derive(Clone)]
pub struct Store {
    tx: Arc<watch::Sender<Arc<AppState>>>,
}

impl Store {
    pub fn new(initial_state: AppState) -> Self {
        let (tx, _rx) = watch::channel(Arc::new(initial_state));
        Self { tx: Arc::new(tx) }
    }

    /// Current snapshot (read-only)
    pub fn state(&self) -> Arc<AppState> {
        Arc::clone(&self.tx.borrow())
    }

    /// Apply a message to a copy of the current snapshot and publish the result.
    ///
    /// Dispatches are serialized: the reducer sees the snapshot as of the
    /// moment its message was dispatched, and no other dispatch runs between
    /// reading and publishing.
    pub fn dispatch(&self, msg: Msg) {
        if !msg.is_frequent() {
            log::debug!("Store: dispatching {}", msg.name());
        }
        self.tx.send_modify(|state| {
            let next = update(msg, AppState::clone(state));
            *state = Arc::new(next);
        });
    }

    /// Apply a message only if `guard` holds at the moment of the commit.
    ///
    /// `guard` runs while dispatch is serialized, so no other dispatch can
    /// slip in between the check and the publish. Returns whether the
    /// message was applied.
    pub fn dispatch_if(&self, msg: Msg, guard: impl FnOnce() -> bool) -> bool {
        self.tx.send_if_modified(|state| {
            if !guard() {
                return false;
            }
            if !msg.is_frequent() {
                log::debug!("Store: dispatching {}", msg.name());
            }
            *state = Arc::new(update(msg, AppState::clone(state)));
            true
        })
    }

    /// Derived view with value equality
    pub fn view<T>(&self, select: impl Fn(&AppState) -> T + Send + Sync + 'static) -> View<T>
    where
        T: Clone + PartialEq,
    {
        self.view_by(select, <T as PartialEq>::eq)
    }

    /// Derived view with a custom equality, e.g. `Arc::ptr_eq` for lists
    pub fn view_by<T>(
        &self,
        select: impl Fn(&AppState) -> T + Send + Sync + 'static,
        eq: Distinct<T>,
    ) -> View<T>
    where
        T: Clone,
    {
        View::new(self.tx.subscribe(), select, eq)
    }
}

/// Named views consumed by the presentation layer and the effects
#[derive(Clone)]
pub struct Views {
    pub page: View<u32>,
    pub limit: View<u32>,
    pub offset: View<u32>,
    pub paging: View<(u32, u32)>,
    pub total_page: View<Option<u32>>,
    pub pokemon_urls: View<Arc<[PokemonUrl]>>,
    pub pokemons: View<Arc<[Pokemon]>>,
    pub loading: View<bool>,
    pub counter: View<i64>,
}

impl Views {
    pub fn new(store: &Store) -> Self {
        Self {
            page: store.view(|s| s.page),
            limit: store.view(|s| s.limit),
            offset: store.view(|s| s.offset),
            paging: store.view(|s| (s.limit, s.offset)),
            total_page: store.view(|s| s.total_page),
            pokemon_urls: store.view_by(|s| Arc::clone(&s.pokemon_urls), Arc::ptr_eq),
            pokemons: store.view_by(|s| Arc::clone(&s.pokemons), Arc::ptr_eq),
            loading: store.view(|s| s.loading),
            counter: store.view(|s| s.counter),
        }
    }
}

/// Named action emitters
#[derive(Clone)]
pub struct Actions {
    store: Store,
}

impl Actions {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn next_page(&self) {
        self.store.dispatch(Msg::NextPage);
    }

    pub fn prev_page(&self) {
        self.store.dispatch(Msg::PrevPage);
    }

    pub fn set_pokemon_urls(&self, urls: impl Into<Arc<[PokemonUrl]>>) {
        self.store.dispatch(Msg::SetPokemonUrls(urls.into()));
    }

    pub fn set_pokemons(&self, pokemons: impl Into<Arc<[Pokemon]>>) {
        self.store.dispatch(Msg::SetPokemons(pokemons.into()));
    }

    pub fn set_loading(&self, loading: bool) {
        self.store.dispatch(Msg::SetLoading(loading));
    }

    pub fn set_total_page(&self, total: u32) {
        self.store.dispatch(Msg::SetTotalPage(total));
    }

    pub fn increase_counter(&self, value: i64) {
        self.store.dispatch(Msg::IncreaseCounter(value));
    }

    pub fn decrease_counter(&self, value: i64) {
        self.store.dispatch(Msg::DecreaseCounter(value));
    }

    pub fn store(&self) -> &Store {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_dispatch_replaces_snapshot() {
        let store = Store::new(AppState::default());
        let before = store.state();

        store.dispatch(Msg::NextPage);
        let after = store.state();

        assert!(!Arc::ptr_eq(&before, &after));
        assert_eq!(before.offset, 0);
        assert_eq!(after.offset, 10);
        assert_eq!(after.page, 2);
    }

    #[test]
    fn test_prev_page_from_zero_keeps_state() {
        let store = Store::new(AppState::default());
        let before = store.state();

        store.dispatch(Msg::PrevPage);

        assert_eq!(*store.state(), *before);
    }

    #[test]
    fn test_dispatch_if_applies_when_guard_holds() {
        let store = Store::new(AppState::default());

        assert!(store.dispatch_if(Msg::SetTotalPage(3), || true));
        assert_eq!(store.state().total_page, Some(3));
    }

    #[tokio::test]
    async fn test_dispatch_if_rejected_leaves_snapshot_and_views_untouched() {
        let store = Store::new(AppState::default());
        let mut rx = store.view(|s| s.page).subscribe();
        assert_eq!(rx.recv().await, Some(1));
        let before = store.state();

        assert!(!store.dispatch_if(Msg::NextPage, || false));

        assert!(Arc::ptr_eq(&before, &store.state()));
        let pending =
            tokio::time::timeout(std::time::Duration::from_millis(50), rx.recv()).await;
        assert!(pending.is_err());
    }

    #[test]
    fn test_actions_dispatch_in_order() {
        let store = Store::new(AppState::default());
        let actions = Actions::new(store.clone());

        actions.next_page();
        actions.next_page();
        actions.prev_page();
        actions.set_total_page(5);
        actions.set_loading(true);
        actions.increase_counter(3);
        actions.decrease_counter(1);

        let state = store.state();
        assert_eq!(state.offset, 10);
        assert_eq!(state.page, 2);
        assert_eq!(state.total_page, Some(5));
        assert!(state.loading);
        assert_eq!(state.counter, 2);
    }

    #[test]
    fn test_actions_set_lists() {
        let store = Store::new(AppState::default());
        let actions = Actions::new(store.clone());

        actions.set_pokemon_urls(vec![PokemonUrl::new("bulbasaur", "u1")]);
        actions.set_pokemons(Vec::<Pokemon>::new());

        let state = store.state();
        assert_eq!(state.pokemon_urls.len(), 1);
        assert!(state.pokemons.is_empty());
    }

    #[test]
    fn test_named_views_read_current_snapshot() {
        let store = Store::new(AppState::new(20));
        let views = Views::new(&store);
        store.dispatch(Msg::NextPage);

        assert_eq!(views.page.get(), 2);
        assert_eq!(views.limit.get(), 20);
        assert_eq!(views.offset.get(), 20);
        assert_eq!(views.paging.get(), (20, 20));
        assert_eq!(views.total_page.get(), None);
        assert!(!views.loading.get());
        assert_eq!(views.counter.get(), 0);
    }

    #[test]
    fn test_dispatch_from_many_threads_is_serialized() {
        let store = Store::new(AppState::new(1));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = store.clone();
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        store.dispatch(Msg::NextPage);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let state = store.state();
        assert_eq!(state.offset, 800);
        assert_eq!(state.page, 801);
    }
}
