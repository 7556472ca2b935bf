use std::sync::Arc;

use idechef_core::application::{AppLocaleStore, IdechefService};

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: IdechefService,
    pub locale_store: Arc<AppLocaleStore>,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: IdechefService, locale_store: AppLocaleStore) -> Self {
        Self {
            args,
            service,
            locale_store: Arc::new(locale_store),
        }
    }
}
