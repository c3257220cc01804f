use std::sync::Arc;

use crate::{
    config::AppConfig,
    services::{store::TripRepository, trips::TripService},
};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub trips: TripService,
}

impl AppState {
    pub fn new(config: AppConfig, repo: Arc<dyn TripRepository>) -> Self {
        Self {
            config,
            trips: TripService::new(repo),
        }
    }
}
