use std::{future::Future, sync::Arc};

use color_eyre::eyre::Result;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::{
    core::{
        effect::PaginationEffect,
        loading::LoadingTracker,
        msg::Msg,
        state::AppState,
        store::{Actions, Store, Views},
        translator::{translate_key, UiAction},
    },
    infrastructure::{
        catalog::CatalogApi,
        config::Config,
        tui::{Event, EventSource},
    },
    presentation::{self, components::HomeData},
};

/// Composition root: owns the store and drives the pagination effect
///
/// Must be created inside a Tokio runtime since the effect is spawned
/// immediately and issues the initial page load after the debounce.
pub struct AppRunner {
    store: Store,
    actions: Actions,
    views: Views,
    effect_token: CancellationToken,
    effect_task: JoinHandle<()>,
    tick: usize,
    should_quit: bool,
}

impl AppRunner {
    pub fn new(config: &Config, catalog: Arc<dyn CatalogApi>) -> Self {
        let store = Store::new(AppState::new(config.limit));
        let actions = Actions::new(store.clone());
        let views = Views::new(&store);
        let loading = LoadingTracker::new(actions.clone(), config.settle_delay());

        let (effect_token, effect) = PaginationEffect::new(
            catalog,
            &views,
            actions.clone(),
            loading,
            config.debounce(),
        );
        let effect_task = effect.run();

        Self {
            store,
            actions,
            views,
            effect_token,
            effect_task,
            tick: 0,
            should_quit: false,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn views(&self) -> &Views {
        &self.views
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Apply one terminal event
    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Quit | Event::Closed => self.should_quit = true,
            Event::Tick => self.tick = self.tick.wrapping_add(1),
            Event::Key(key) => match translate_key(key) {
                Some(UiAction::Quit) => self.should_quit = true,
                Some(UiAction::Dispatch(msg)) => {
                    if self.is_out_of_range(&msg) {
                        log::debug!("AppRunner: ignoring {} at page boundary", msg.name());
                    } else {
                        self.emit(msg);
                    }
                }
                None => {}
            },
            Event::Error => log::warn!("AppRunner: terminal event error"),
            Event::Init | Event::Render | Event::Resize(_, _) => {}
        }
    }

    fn emit(&self, msg: Msg) {
        match msg {
            Msg::NextPage => self.actions.next_page(),
            Msg::PrevPage => self.actions.prev_page(),
            Msg::IncreaseCounter(value) => self.actions.increase_counter(value),
            Msg::DecreaseCounter(value) => self.actions.decrease_counter(value),
            other => self.store.dispatch(other),
        }
    }

    /// Paging past either end of the catalog is ignored once the bounds are known
    fn is_out_of_range(&self, msg: &Msg) -> bool {
        let state = self.store.state();
        match msg {
            Msg::NextPage => state.is_last_page(),
            Msg::PrevPage => state.is_first_page(),
            _ => false,
        }
    }

    /// Process events until a quit request or the source runs dry.
    /// Frames are drawn on `Init`, `Render` and `Resize` when attached to a terminal.
    pub async fn run(&mut self, events: &mut EventSource) -> Result<()> {
        if let EventSource::Real(tui) = events {
            tui.enter()?;
        }

        while let Some(event) = events.next().await {
            self.handle_event(&event);
            if self.should_quit {
                break;
            }
            if matches!(event, Event::Init | Event::Render | Event::Resize(_, _)) {
                self.draw(events)?;
            }
        }

        if let EventSource::Real(tui) = events {
            tui.exit().await?;
        }
        Ok(())
    }

    fn draw(&self, events: &mut EventSource) -> Result<()> {
        if let EventSource::Real(tui) = events {
            let data = HomeData::from_views(&self.views);
            let tick = self.tick;
            tui.draw(|frame| presentation::render(frame, &data, tick))?;
        }
        Ok(())
    }

    /// Log every committed detail list until `shutdown` resolves
    pub async fn run_headless(&self, shutdown: impl Future<Output = ()>) -> Result<()> {
        let mut pokemons = self.views.pokemons.subscribe();
        let mut loading = self.views.loading.subscribe();
        tokio::pin!(shutdown);

        // Skip the empty initial list
        pokemons.recv().await;

        loop {
            tokio::select! {
                next = pokemons.recv() => match next {
                    Some(list) => {
                        let state = self.store.state();
                        let names: Vec<&str> = list.iter().map(|p| p.name.as_str()).collect();
                        log::info!(
                            "page {}/{}: {}",
                            state.page,
                            state.total_page.unwrap_or_default(),
                            names.join(", ")
                        );
                    }
                    None => break,
                },
                next = loading.recv() => match next {
                    Some(flag) => log::debug!("loading: {flag}"),
                    None => break,
                },
                _ = &mut shutdown => break,
            }
        }
        Ok(())
    }

    /// Stop the pagination effect and wait for it to finish
    pub async fn shutdown(self) {
        self.effect_token.cancel();
        if let Err(e) = self.effect_task.await {
            log::error!("AppRunner: effect task failed: {e}");
        }
    }
}
