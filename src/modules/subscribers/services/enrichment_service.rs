use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::core::WeekInterval;
use crate::modules::gateways::{OcsGateway, OcsRequest};
use crate::modules::reports::models::{ReportRow, WeeklyFigure};
use crate::modules::subscribers::models::{
    decode_last_usage_date, decode_packages, PrepaidPackage, Subscriber, UsagePeriod,
};

/// Joins package, last-usage and weekly usage data for one subscriber.
///
/// Every remote call is allowed to fail independently; a failure only blanks
/// the datum it was fetching.
pub struct SubscriberEnricher {
    gateway: Arc<dyn OcsGateway>,
}

impl SubscriberEnricher {
    pub fn new(gateway: Arc<dyn OcsGateway>) -> Self {
        Self { gateway }
    }

    /// Produce the report rows for one subscriber: one per package, or a
    /// single package-less row. Weekly figures are subscriber-scoped and are
    /// repeated on every package row.
    pub async fn enrich(
        &self,
        subscriber: &Subscriber,
        weeks: &[WeekInterval],
        account_id: i64,
    ) -> Vec<ReportRow> {
        let (packages, last_usage_date) =
            tokio::join!(self.fetch_packages(subscriber), self.fetch_last_usage(subscriber));

        let weekly = self.fetch_weekly_figures(subscriber, weeks).await;

        debug!(
            account_id,
            subscriber_id = %subscriber.display_id(),
            packages = packages.len(),
            weeks = weekly.len(),
            "Subscriber enriched"
        );

        let row = |package: Option<PrepaidPackage>| ReportRow {
            subscriber_id: subscriber.subscriber_id.clone(),
            iccid: subscriber.iccid.clone(),
            last_usage_date: last_usage_date.clone(),
            package,
            weekly: weekly.clone(),
        };

        if packages.is_empty() {
            vec![row(None)]
        } else {
            packages.into_iter().map(|package| row(Some(package))).collect()
        }
    }

    async fn fetch_packages(&self, subscriber: &Subscriber) -> Vec<PrepaidPackage> {
        let request = OcsRequest::list_prepaid_packages(subscriber.subscriber_id.clone());
        match self.gateway.execute(&request).await {
            Ok(response) => decode_packages(&response),
            Err(e) => {
                warn!(
                    operation = request.operation(),
                    subscriber_id = %subscriber.display_id(),
                    error = %e,
                    "Failed to fetch prepaid packages"
                );
                Vec::new()
            }
        }
    }

    async fn fetch_last_usage(&self, subscriber: &Subscriber) -> Option<String> {
        let request = OcsRequest::single_subscriber(subscriber.iccid.as_deref()?);
        match self.gateway.execute(&request).await {
            Ok(response) => decode_last_usage_date(&response),
            Err(e) => {
                warn!(
                    operation = request.operation(),
                    subscriber_id = %subscriber.display_id(),
                    error = %e,
                    "Failed to fetch last usage date"
                );
                None
            }
        }
    }

    /// One call per week, strictly in sequence
    async fn fetch_weekly_figures(
        &self,
        subscriber: &Subscriber,
        weeks: &[WeekInterval],
    ) -> BTreeMap<WeekInterval, WeeklyFigure> {
        let mut weekly = BTreeMap::new();

        for week in weeks {
            let request = OcsRequest::usage_over_period(subscriber.subscriber_id.clone(), week);
            let figure = match self.gateway.execute(&request).await {
                Ok(response) => WeeklyFigure::from(UsagePeriod::from_response(&response)),
                Err(e) => {
                    warn!(
                        operation = request.operation(),
                        subscriber_id = %subscriber.display_id(),
                        week = %week,
                        error = %e,
                        "Failed to fetch weekly usage"
                    );
                    WeeklyFigure::Unavailable
                }
            };
            weekly.insert(*week, figure);
        }

        weekly
    }
}
