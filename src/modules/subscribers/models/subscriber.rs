use serde_json::Value;

use super::fields::{as_text_lenient, first_present, lookup};
use crate::modules::gateways::OcsId;

const SUBSCRIBER_ID_KEYS: &[&str] = &["subscriberId", "subscriberid"];
const ICCID_KEYS: &[&str] = &["iccid", "ICCID"];
const ACTIVE_STATUS: &str = "ACTIVE";

/// Subscriber as returned by `listSubscriber`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Subscriber {
    /// Sent back unchanged in every follow-up request
    pub subscriber_id: Option<OcsId>,
    /// ICCID of the first SIM record, used as the usage-history key
    pub iccid: Option<String>,
    pub statuses: Vec<String>,
}

/// Outcome of decoding a `listSubscriber` response
#[derive(Debug, Clone, PartialEq)]
pub enum SubscriberListing {
    Subscribers(Vec<Subscriber>),
    /// `subscriberList` exists but is not an array
    Malformed,
}

impl Subscriber {
    pub fn from_value(value: &Value) -> Self {
        let iccid = value
            .get("imsiList")
            .and_then(Value::as_array)
            .and_then(|sims| sims.first())
            .and_then(|sim| first_present(sim, ICCID_KEYS))
            .and_then(as_text_lenient)
            .filter(|iccid| !iccid.is_empty());

        let statuses = value
            .get("status")
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|entry| entry.get("status").and_then(as_text_lenient))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            subscriber_id: first_present(value, SUBSCRIBER_ID_KEYS).and_then(OcsId::from_value),
            iccid,
            statuses,
        }
    }

    pub fn is_active(&self) -> bool {
        self.statuses
            .iter()
            .any(|status| status.eq_ignore_ascii_case(ACTIVE_STATUS))
    }

    /// Subscriber id as shown in logs
    pub fn display_id(&self) -> String {
        self.subscriber_id
            .as_ref()
            .map(OcsId::to_string)
            .unwrap_or_else(|| "-".to_string())
    }
}

/// Decode `listSubscriber.subscriberList`; a missing or null list counts as empty
pub fn decode_subscriber_list(response: &Value) -> SubscriberListing {
    match lookup(response, &["listSubscriber", "subscriberList"]) {
        None => SubscriberListing::Subscribers(Vec::new()),
        Some(Value::Array(entries)) => {
            SubscriberListing::Subscribers(entries.iter().map(Subscriber::from_value).collect())
        }
        Some(_) => SubscriberListing::Malformed,
    }
}

/// Extract `getSingleSubscriber.lastUsageDate`
pub fn decode_last_usage_date(response: &Value) -> Option<String> {
    lookup(response, &["getSingleSubscriber", "lastUsageDate"])
        .and_then(as_text_lenient)
        .filter(|date| !date.is_empty())
}
