pub mod gateways;
pub mod health;
pub mod reports;
pub mod subscribers;

use std::sync::Arc;

use actix_web::web;

use crate::config::ReportSettings;
use gateways::OcsGateway;
use reports::ReportService;

/// Shared handler state, built once and cloned into every worker
#[derive(Clone)]
pub struct AppState {
    gateway: web::Data<dyn OcsGateway>,
    reports: web::Data<ReportService>,
    settings: web::Data<ReportSettings>,
}

impl AppState {
    pub fn new(gateway: Arc<dyn OcsGateway>, settings: ReportSettings) -> Self {
        Self {
            reports: web::Data::new(ReportService::new(gateway.clone(), settings.clone())),
            gateway: web::Data::from(gateway),
            settings: web::Data::new(settings),
        }
    }

    /// Register app data and every HTTP route
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.gateway.clone())
            .app_data(self.reports.clone())
            .app_data(self.settings.clone());

        health::configure(cfg);
        gateways::configure(cfg);
        reports::configure(cfg);
    }
}
