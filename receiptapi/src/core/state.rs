use crate::core::prelude::*;
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct AppState {
    /// The in-memory receipt store.
    /// Shared by every request handler.
    pub store: Arc<ReceiptStore>,
}

impl AppState {
    pub fn new(store: Arc<ReceiptStore>) -> Self {
        Self { store }
    }
}
