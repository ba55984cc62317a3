//! Pagination effect
//!
//! Watches `(limit, offset)`, waits for it to settle, then loads the page
//! listing (phase A) followed by the detail records (phase B). A newer
//! `(limit, offset)` supersedes any chain still in flight: the old chain runs
//! to completion but its results are discarded.

use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::Duration,
};

use tokio::{task::JoinHandle, time::sleep};
use tokio_util::sync::CancellationToken;

use crate::{
    core::{
        loading::LoadingTracker,
        msg::Msg,
        store::{Actions, Views},
        view::ViewReceiver,
    },
    domain::PokemonUrl,
    infrastructure::catalog::CatalogApi,
};

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

pub struct PaginationEffect {
    catalog: Arc<dyn CatalogApi>,
    actions: Actions,
    loading: LoadingTracker,
    paging: ViewReceiver<(u32, u32)>,
    debounce: Duration,
    epoch: Arc<AtomicU64>,
    cancel_token: CancellationToken,
}

impl PaginationEffect {
    pub fn new(
        catalog: Arc<dyn CatalogApi>,
        views: &Views,
        actions: Actions,
        loading: LoadingTracker,
        debounce: Duration,
    ) -> (CancellationToken, Self) {
        let cancel_token = CancellationToken::new();
        (
            cancel_token.clone(),
            Self {
                catalog,
                actions,
                loading,
                paging: views.paging.subscribe(),
                debounce,
                epoch: Arc::new(AtomicU64::new(0)),
                cancel_token,
            },
        )
    }

    /// Run the effect in a background task
    pub fn run(self) -> JoinHandle<()> {
        tokio::spawn(async move {
            self.run_effect().await;
            log::info!("PaginationEffect: stopped");
        })
    }

    async fn run_effect(mut self) {
        let mut pending = tokio::select! {
            next = self.paging.recv() => match next {
                Some(paging) => paging,
                None => return,
            },
            _ = self.cancel_token.cancelled() => return,
        };

        loop {
            // Restart the quiet period on every new value
            let (limit, offset) = loop {
                tokio::select! {
                    next = self.paging.recv() => match next {
                        Some(paging) => pending = paging,
                        None => return,
                    },
                    _ = sleep(self.debounce) => break pending,
                    _ = self.cancel_token.cancelled() => return,
                }
            };

            self.start_chain(limit, offset);

            pending = tokio::select! {
                next = self.paging.recv() => match next {
                    Some(paging) => paging,
                    None => return,
                },
                _ = self.cancel_token.cancelled() => return,
            };
        }
    }

    fn start_chain(&self, limit: u32, offset: u32) {
        let epoch = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        log::debug!("PaginationEffect: chain {epoch} for limit={limit} offset={offset}");
        let chain = RequestChain {
            catalog: Arc::clone(&self.catalog),
            actions: self.actions.clone(),
            loading: self.loading.clone(),
            current_epoch: Arc::clone(&self.epoch),
            epoch,
            cancel_token: self.cancel_token.child_token(),
        };
        tokio::spawn(chain.run(limit, offset));
    }
}

/// One page-then-details request sequence
struct RequestChain {
    catalog: Arc<dyn CatalogApi>,
    actions: Actions,
    loading: LoadingTracker,
    current_epoch: Arc<AtomicU64>,
    epoch: u64,
    cancel_token: CancellationToken,
}

impl RequestChain {
    fn is_current(&self) -> bool {
        !self.cancel_token.is_cancelled() && self.current_epoch.load(Ordering::SeqCst) == self.epoch
    }

    /// Dispatch only if no newer chain has started, checked atomically with
    /// the commit
    fn commit(&self, msg: Msg) -> bool {
        self.actions.store().dispatch_if(msg, || self.is_current())
    }

    async fn run(self, limit: u32, offset: u32) {
        let page_loading = self.loading.start();
        let fetched = tokio::select! {
            fetched = self.catalog.fetch_page(limit, offset) => fetched,
            _ = self.cancel_token.cancelled() => {
                log::debug!("PaginationEffect: chain {} cancelled during page fetch", self.epoch);
                return;
            }
        };
        let page = match fetched {
            Ok(page) => page,
            Err(e) => {
                // The page keeps its previous data
                log::warn!("PaginationEffect: page fetch failed (limit={limit} offset={offset}): {e}");
                return;
            }
        };

        let total_page = page.total_pages(limit);
        let references: Arc<[PokemonUrl]> = Arc::from(page.results);
        if !self.commit(Msg::SetTotalPage(total_page))
            || !self.commit(Msg::SetPokemonUrls(Arc::clone(&references)))
        {
            log::debug!("PaginationEffect: discarding stale page for chain {}", self.epoch);
            return;
        }

        // Phase B starts before phase A releases its hold
        let details_loading = self.loading.start();
        drop(page_loading);

        let pokemons = tokio::select! {
            pokemons = self.catalog.fetch_details(&references) => pokemons,
            _ = self.cancel_token.cancelled() => {
                log::debug!("PaginationEffect: chain {} cancelled during detail fetch", self.epoch);
                return;
            }
        };

        let resolved = pokemons.len();
        if !self.commit(Msg::SetPokemons(Arc::from(pokemons))) {
            log::debug!("PaginationEffect: discarding stale details for chain {}", self.epoch);
            return;
        }
        if resolved < references.len() {
            log::info!(
                "PaginationEffect: {} of {} records could not be resolved",
                references.len() - resolved,
                references.len()
            );
        }
        drop(details_loading);
    }
}
