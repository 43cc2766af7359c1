use std::sync::Arc;

use tracing::{error, info, warn};

use crate::config::ReportSettings;
use crate::core::{partition_weeks, run_bounded, Result};
use crate::modules::gateways::{OcsGateway, OcsRequest};
use crate::modules::reports::models::{GeneratedReport, ReportOutcome, ReportRequest, RowRecord};
use crate::modules::subscribers::models::{decode_subscriber_list, SubscriberListing};
use crate::modules::subscribers::SubscriberEnricher;

use super::table_normalizer::normalize;

/// Service for generating per-subscriber weekly usage reports
pub struct ReportService {
    gateway: Arc<dyn OcsGateway>,
    enricher: SubscriberEnricher,
    settings: ReportSettings,
}

impl ReportService {
    /// Create a new report service
    pub fn new(gateway: Arc<dyn OcsGateway>, settings: ReportSettings) -> Self {
        Self {
            enricher: SubscriberEnricher::new(gateway.clone()),
            gateway,
            settings,
        }
    }

    pub fn settings(&self) -> &ReportSettings {
        &self.settings
    }

    /// Generate the usage report for one account
    ///
    /// Lists the account's subscribers, enriches up to
    /// `settings.max_concurrent` of them at a time, and normalizes the rows
    /// into a table. Rows keep subscriber list order.
    ///
    /// # Errors
    /// Only when the subscriber-list call itself fails. Failures while
    /// enriching a subscriber blank the affected cells instead.
    pub async fn generate_report(&self, request: &ReportRequest) -> Result<ReportOutcome> {
        let weeks = partition_weeks(request.start_date, request.end_date);

        info!(
            account_id = request.account_id,
            start_date = %request.start_date,
            end_date = %request.end_date,
            weeks = weeks.len(),
            "Generating subscriber usage report"
        );

        let response = self
            .gateway
            .execute(&OcsRequest::list_subscribers(request.account_id))
            .await
            .map_err(|e| {
                error!(
                    account_id = request.account_id,
                    error = %e,
                    "Failed to list subscribers"
                );
                e
            })?;

        let subscribers = match decode_subscriber_list(&response) {
            SubscriberListing::Subscribers(subscribers) => subscribers,
            SubscriberListing::Malformed => {
                warn!(
                    account_id = request.account_id,
                    "Subscriber list is not an array, returning empty report"
                );
                return Ok(ReportOutcome::MalformedSubscriberList { note: response });
            }
        };

        info!(
            account_id = request.account_id,
            subscribers = subscribers.len(),
            active = subscribers.iter().filter(|s| s.is_active()).count(),
            "Subscriber list fetched"
        );

        let batches = run_bounded(&subscribers, self.settings.max_concurrent, |subscriber| {
            self.enricher.enrich(subscriber, &weeks, request.account_id)
        })
        .await;

        let rows: Vec<RowRecord> = batches
            .into_iter()
            .flatten()
            .map(|row| row.to_record())
            .collect();
        let table = normalize(rows);

        info!(
            account_id = request.account_id,
            rows = table.len(),
            columns = table.columns.len(),
            "Report generated"
        );

        Ok(ReportOutcome::Generated(GeneratedReport {
            account_id: request.account_id,
            weeks,
            table,
        }))
    }
}

// End-to-end coverage against a fake OCS server lives in
// tests/integration/report_generation_test.rs
