use std::sync::Arc;

use crate::services::{Catalog, MetadataProvider, Recommender};

/// Shared application state
///
/// Everything here is read-only after startup: the catalog is loaded once,
/// and both collaborators sit behind trait objects so tests can substitute
/// them.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub recommender: Arc<dyn Recommender>,
    pub metadata: Arc<dyn MetadataProvider>,
}

impl AppState {
    pub fn new(
        catalog: Arc<Catalog>,
        recommender: Arc<dyn Recommender>,
        metadata: Arc<dyn MetadataProvider>,
    ) -> Self {
        Self {
            catalog,
            recommender,
            metadata,
        }
    }
}
