//! Catalog Data Store
//!
//! Loads the item collection once and hands out the same immutable copy
//! afterwards. Concurrent callers share one in-flight request.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::{FutureExt, LocalBoxFuture, Shared};

use crate::error::CatalogResult;
use crate::models::Item;

/// The loaded collection. Read-only once built.
pub type Catalog = Arc<[Item]>;

type PendingLoad = Shared<LocalBoxFuture<'static, CatalogResult<Catalog>>>;

/// Where the raw item list comes from
#[async_trait(?Send)]
pub trait CatalogSource {
    async fn fetch_items(&self) -> CatalogResult<Vec<Item>>;
}

enum LoadState {
    Empty,
    Loading(PendingLoad),
    Ready(Catalog),
}

/// Memoizing store in front of a `CatalogSource`
pub struct DataStore<S> {
    source: Rc<S>,
    state: RefCell<LoadState>,
}

impl<S: CatalogSource + 'static> DataStore<S> {
    pub fn new(source: S) -> Self {
        Self {
            source: Rc::new(source),
            state: RefCell::new(LoadState::Empty),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// The collection if it has already been loaded
    pub fn cached(&self) -> Option<Catalog> {
        match &*self.state.borrow() {
            LoadState::Ready(catalog) => Some(Arc::clone(catalog)),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(&*self.state.borrow(), LoadState::Loading(_))
    }

    /// Return the cached collection, joining or starting a fetch if needed.
    /// A failed fetch leaves the store empty so the next call retries.
    pub async fn load(&self) -> CatalogResult<Catalog> {
        let pending = {
            let mut state = self.state.borrow_mut();
            match &*state {
                LoadState::Ready(catalog) => return Ok(Arc::clone(catalog)),
                LoadState::Loading(pending) => pending.clone(),
                LoadState::Empty => {
                    let pending = Self::start_fetch(Rc::clone(&self.source));
                    *state = LoadState::Loading(pending.clone());
                    pending
                }
            }
        };

        let result = pending.clone().await;

        let mut state = self.state.borrow_mut();
        let settles_current = matches!(&*state, LoadState::Loading(current) if current.ptr_eq(&pending));
        if settles_current {
            *state = match &result {
                Ok(catalog) => LoadState::Ready(Arc::clone(catalog)),
                Err(_) => LoadState::Empty,
            };
        }
        result
    }

    fn start_fetch(source: Rc<S>) -> PendingLoad {
        async move {
            log::debug!("[CATALOG] Fetching items");
            match source.fetch_items().await {
                Ok(items) => {
                    log::info!("[CATALOG] Loaded {} items", items.len());
                    Ok(Catalog::from(items))
                }
                Err(err) => {
                    log::error!("[CATALOG] Load failed: {}", err);
                    Err(err)
                }
            }
        }
        .boxed_local()
        .shared()
    }
}
