//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;

use crate::catalog::DataStore;
use crate::commands::{self, HttpCatalogSource};
use crate::config::CatalogConfig;
use crate::router::Router;
use crate::view_model::{NavTicket, NavigationCounter, ViewRequest};

pub type CatalogStore = DataStore<HttpCatalogSource>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to retry loading after a failure - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to retry loading after a failure - write
    set_reload_trigger: WriteSignal<u32>,
    /// What the view region should show
    pub request: RwSignal<ViewRequest>,
    pub router: Router,
    config: StoredValue<CatalogConfig>,
    catalog: StoredValue<Rc<CatalogStore>, LocalStorage>,
    navigation: StoredValue<NavigationCounter>,
}

impl AppContext {
    pub fn new(config: CatalogConfig) -> Self {
        let (reload_trigger, set_reload_trigger) = signal(0u32);
        let initial = commands::current_route(config.hash_routing);
        log::info!("[APP] Initial route {:?}", initial);

        let request = RwSignal::new(ViewRequest::Route(initial.clone()));
        let router = Router::new(initial, request, config.hash_routing);
        let store = CatalogStore::new(HttpCatalogSource::new(config.data_url.clone()));

        Self {
            reload_trigger,
            set_reload_trigger,
            request,
            router,
            config: StoredValue::new(config),
            catalog: StoredValue::new_local(Rc::new(store)),
            navigation: StoredValue::new(NavigationCounter::default()),
        }
    }

    /// Handle to the catalog store, for use inside async tasks
    pub fn catalog(&self) -> Rc<CatalogStore> {
        self.catalog.get_value()
    }

    pub fn config(&self) -> CatalogConfig {
        self.config.get_value()
    }

    /// Retry after a load failure
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Show search results in the view region
    pub fn search(&self, query: String) {
        self.request.set(ViewRequest::Search(query));
    }

    /// Mark the start of a new render; earlier tickets become stale
    pub fn begin_navigation(&self) -> NavTicket {
        let mut counter = self.navigation.get_value();
        let ticket = counter.begin();
        self.navigation.set_value(counter);
        ticket
    }

    pub fn is_current(&self, ticket: NavTicket) -> bool {
        self.navigation.with_value(|counter| counter.is_current(ticket))
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
