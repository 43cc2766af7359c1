use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::Value;

use crate::config::ReportSettings;
use crate::core::request::parse_optional_json;
use crate::core::{AppError, Result};
use crate::modules::gateways::{OcsGateway, OcsRequest};
use crate::modules::reports::models::resolve_account_id;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListSubscribersQuery {
    #[serde(rename = "accountId", default)]
    pub account_id: Option<Value>,
}

/// POST /api/ocs/list-subscribers
/// Forwards `listSubscriber` for the account and returns the raw OCS response
pub async fn post_list_subscribers(
    gateway: web::Data<dyn OcsGateway>,
    settings: web::Data<ReportSettings>,
    body: web::Bytes,
) -> std::result::Result<HttpResponse, AppError> {
    let query: ListSubscribersQuery = parse_optional_json(&body)?;
    list_subscribers(gateway.get_ref(), &settings, query).await
}

/// GET /api/ocs/list-subscribers?accountId=
pub async fn get_list_subscribers(
    gateway: web::Data<dyn OcsGateway>,
    settings: web::Data<ReportSettings>,
    query: web::Query<ListSubscribersQuery>,
) -> std::result::Result<HttpResponse, AppError> {
    list_subscribers(gateway.get_ref(), &settings, query.into_inner()).await
}

async fn list_subscribers(
    gateway: &dyn OcsGateway,
    settings: &ReportSettings,
    query: ListSubscribersQuery,
) -> Result<HttpResponse> {
    let account_id = resolve_account_id(query.account_id.as_ref(), settings.default_account_id);

    tracing::debug!(account_id, gateway = gateway.name(), "Listing subscribers");

    let response = gateway
        .execute(&OcsRequest::list_subscribers(account_id))
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

/// Configure subscriber passthrough routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/ocs/list-subscribers")
            .route(web::post().to(post_list_subscribers))
            .route(web::get().to(get_list_subscribers)),
    );
}
