use serde::Serialize;
use serde_json::Value;

use super::OcsId;
use crate::core::{Result, WeekInterval};

/// One OCS operation. Serializes to the request body the API expects, where
/// the single top-level key names the operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum OcsRequest {
    #[serde(rename = "listSubscriber")]
    ListSubscriber {
        #[serde(rename = "accountId")]
        account_id: i64,
    },

    #[serde(rename = "listSubscriberPrepaidPackages")]
    ListSubscriberPrepaidPackages {
        #[serde(rename = "subscriberId", skip_serializing_if = "Option::is_none")]
        subscriber_id: Option<OcsId>,
    },

    #[serde(rename = "getSingleSubscriber")]
    GetSingleSubscriber { iccid: String },

    #[serde(rename = "subscriberUsageOverPeriod")]
    SubscriberUsageOverPeriod {
        subscriber: SubscriberRef,
        period: UsagePeriodWindow,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubscriberRef {
    #[serde(rename = "subscriberId", skip_serializing_if = "Option::is_none")]
    pub subscriber_id: Option<OcsId>,
}

/// Usage window, both ends as `YYYY-MM-DD`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsagePeriodWindow {
    pub start: String,
    pub end: String,
}

impl OcsRequest {
    pub fn list_subscribers(account_id: i64) -> Self {
        OcsRequest::ListSubscriber { account_id }
    }

    pub fn list_prepaid_packages(subscriber_id: Option<OcsId>) -> Self {
        OcsRequest::ListSubscriberPrepaidPackages { subscriber_id }
    }

    pub fn single_subscriber(iccid: impl Into<String>) -> Self {
        OcsRequest::GetSingleSubscriber {
            iccid: iccid.into(),
        }
    }

    pub fn usage_over_period(subscriber_id: Option<OcsId>, week: &WeekInterval) -> Self {
        let (start, end) = week.iso_bounds();
        OcsRequest::SubscriberUsageOverPeriod {
            subscriber: SubscriberRef { subscriber_id },
            period: UsagePeriodWindow { start, end },
        }
    }

    /// Operation name, also the top-level key of the response
    pub fn operation(&self) -> &'static str {
        match self {
            OcsRequest::ListSubscriber { .. } => "listSubscriber",
            OcsRequest::ListSubscriberPrepaidPackages { .. } => "listSubscriberPrepaidPackages",
            OcsRequest::GetSingleSubscriber { .. } => "getSingleSubscriber",
            OcsRequest::SubscriberUsageOverPeriod { .. } => "subscriberUsageOverPeriod",
        }
    }

    pub fn to_body(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}
