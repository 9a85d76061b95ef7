pub mod error;
pub mod gate;
pub mod handler;
pub mod identity;
pub mod model;
pub mod route;
pub mod schema;
pub mod store;

use crate::store::TodoStore;

// Struct representing the application state
pub struct AppState {
    pub store: TodoStore,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            store: TodoStore::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
