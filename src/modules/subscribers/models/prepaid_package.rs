use serde_json::Value;

use super::fields::{as_amount, as_text_lenient, first_present, lookup, Amount};
use crate::modules::gateways::OcsId;

// Alias order: the API's native lowercase name first, camelCase second.
const PACKAGE_ID_KEYS: &[&str] = &["subscriberprepaidpackageid", "subscriberPrepaidPackageId"];
const TEMPLATE_KEYS: &[&str] = &["packageTemplate", "packagetemplate"];
const TEMPLATE_ID_KEYS: &[&str] = &["prepaidpackagetemplateid", "prepaidPackageTemplateId"];
const TEMPLATE_NAME_KEYS: &[&str] = &["prepaidpackagetemplatename", "prepaidPackageTemplateName"];
const SUBSCRIBER_COST_KEYS: &[&str] = &["cost"];
const RESELLER_COST_KEYS: &[&str] = &["resellercost", "resellerCost"];
const USED_BYTES_KEYS: &[&str] = &["useddatabyte", "usedDataByte"];
const CAPACITY_BYTES_KEYS: &[&str] = &["pckdatabyte", "pckDataByte"];
const ACTIVATION_KEYS: &[&str] = &["tstartactivationutc", "tsStartActivationUtc"];
const EXPIRY_KEYS: &[&str] = &["tsexpirationutc", "tsExpirationUtc"];

/// Prepaid package owned by a subscriber, with lifetime figures
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrepaidPackage {
    pub package_id: Option<OcsId>,
    pub template_id: Option<OcsId>,
    pub template_name: Option<String>,
    /// Price charged to the subscriber
    pub subscriber_cost: Option<Amount>,
    pub reseller_cost: Option<Amount>,
    pub used_bytes: Option<Amount>,
    /// Data allowance of the package
    pub capacity_bytes: Option<Amount>,
    pub activation_date: Option<String>,
    pub expiry_date: Option<String>,
}

impl PrepaidPackage {
    pub fn from_value(value: &Value) -> Self {
        let template = first_present(value, TEMPLATE_KEYS).unwrap_or(&Value::Null);

        Self {
            package_id: first_present(value, PACKAGE_ID_KEYS).and_then(OcsId::from_value),
            template_id: first_present(template, TEMPLATE_ID_KEYS).and_then(OcsId::from_value),
            template_name: first_present(template, TEMPLATE_NAME_KEYS).and_then(as_text_lenient),
            subscriber_cost: first_present(value, SUBSCRIBER_COST_KEYS).and_then(as_amount),
            reseller_cost: first_present(value, RESELLER_COST_KEYS).and_then(as_amount),
            used_bytes: first_present(value, USED_BYTES_KEYS).and_then(as_amount),
            capacity_bytes: first_present(value, CAPACITY_BYTES_KEYS).and_then(as_amount),
            activation_date: first_present(value, ACTIVATION_KEYS).and_then(as_text_lenient),
            expiry_date: first_present(value, EXPIRY_KEYS).and_then(as_text_lenient),
        }
    }
}

/// Decode `listSubscriberPrepaidPackages.packages`; anything but an array is no packages
pub fn decode_packages(response: &Value) -> Vec<PrepaidPackage> {
    lookup(response, &["listSubscriberPrepaidPackages", "packages"])
        .and_then(Value::as_array)
        .map(|packages| packages.iter().map(PrepaidPackage::from_value).collect())
        .unwrap_or_default()
}
