use std::sync::Arc;

use storage::{FsImageCatalog, ImageCatalog};

use super::config::Config;

pub struct AppState {
    pub config: Config,
    pub catalog: Arc<dyn ImageCatalog>,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config, catalog: Arc<dyn ImageCatalog>) -> Arc<Self> {
        Arc::new(Self { config, catalog })
    }

    /// State backed by the configured images directory.
    #[must_use]
    pub fn from_config(config: Config) -> Arc<Self> {
        let catalog = Arc::new(FsImageCatalog::new(config.images_dir.clone()));
        Self::new(config, catalog)
    }
}
