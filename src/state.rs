//! Shared application state for all routes.

use crate::store::ThingStore;

#[derive(Clone)]
pub struct AppState {
    pub store: ThingStore,
}

impl AppState {
    pub fn new(store: ThingStore) -> Self {
        AppState { store }
    }
}
