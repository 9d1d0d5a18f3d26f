//! Shared state handed to every HTTP handler.

use std::sync::Arc;

use crate::port::inbound::todo::TodoService;
use crate::port::outbound::view::ViewRenderer;

/// Application service and renderer shared across requests.
pub struct AppState<T> {
    pub service: Arc<T>,
    pub renderer: Arc<dyn ViewRenderer>,
}

impl<T: TodoService> AppState<T> {
    pub fn new(service: T, renderer: impl ViewRenderer + 'static) -> Self {
        Self {
            service: Arc::new(service),
            renderer: Arc::new(renderer),
        }
    }
}

impl<T> Clone for AppState<T> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            renderer: Arc::clone(&self.renderer),
        }
    }
}
