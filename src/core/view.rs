//! Derived read-only views over the store snapshot
//!
//! A view projects the current [`AppState`] into a smaller value. Subscribers
//! receive the current projection first, then only projections that differ
//! from the last one they received.

use std::sync::Arc;

use futures::Stream;
use tokio::sync::watch;

use crate::core::state::AppState;

type Selector<T> = Arc<dyn Fn(&AppState) -> T + Send + Sync>;

/// Equality used for change suppression
pub type Distinct<T> = fn(&T, &T) -> bool;

pub struct View<T> {
    rx: watch::Receiver<Arc<AppState>>,
    select: Selector<T>,
    eq: Distinct<T>,
}

impl<T> Clone for View<T> {
    fn clone(&self) -> Self {
        Self {
            rx: self.rx.clone(),
            select: Arc::clone(&self.select),
            eq: self.eq,
        }
    }
}

impl<T: Clone> View<T> {
    pub(crate) fn new(
        rx: watch::Receiver<Arc<AppState>>,
        select: impl Fn(&AppState) -> T + Send + Sync + 'static,
        eq: Distinct<T>,
    ) -> Self {
        Self {
            rx,
            select: Arc::new(select),
            eq,
        }
    }

    /// Current projected value
    pub fn get(&self) -> T {
        (self.select)(&**self.rx.borrow())
    }

    pub fn subscribe(&self) -> ViewReceiver<T> {
        ViewReceiver {
            rx: self.rx.clone(),
            select: Arc::clone(&self.select),
            eq: self.eq,
            last: None,
        }
    }
}

/// A subscription to a [`View`]
pub struct ViewReceiver<T> {
    rx: watch::Receiver<Arc<AppState>>,
    select: Selector<T>,
    eq: Distinct<T>,
    last: Option<T>,
}

impl<T: Clone> ViewReceiver<T> {
    /// Wait for the next distinct projection.
    ///
    /// The first call resolves immediately with the current value. Returns
    /// `None` once the store has been dropped.
    pub async fn recv(&mut self) -> Option<T> {
        if self.last.is_none() {
            let value = (self.select)(&**self.rx.borrow_and_update());
            self.last = Some(value.clone());
            return Some(value);
        }

        loop {
            self.rx.changed().await.ok()?;
            let value = (self.select)(&**self.rx.borrow_and_update());
            if let Some(last) = &self.last {
                if (self.eq)(last, &value) {
                    continue;
                }
            }
            self.last = Some(value.clone());
            return Some(value);
        }
    }

    pub fn into_stream(self) -> impl Stream<Item = T>
    where
        T: Send + 'static,
    {
        futures::stream::unfold(self, |mut rx| async move {
            let value = rx.recv().await?;
            Some((value, rx))
        })
    }
}
