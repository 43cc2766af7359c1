//! Decoding of realistic OCS payloads
//!
//! The API mixes naming styles and scalar types between operations and
//! releases. These payloads cover the variants seen in production responses.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::json;

use ocs_report::gateways::OcsId;
use ocs_report::subscribers::models::{
    decode_last_usage_date, decode_packages, decode_subscriber_list, Amount,
};
use ocs_report::subscribers::{SubscriberListing, UsagePeriod};

fn number(value: Decimal) -> Option<Amount> {
    Some(Amount::Number(value))
}

#[test]
fn test_subscriber_list_with_mixed_entries() {
    let response = json!({
        "status": { "code": 0, "msg": "OK" },
        "listSubscriber": {
            "subscriberList": [
                {
                    "subscriberId": 101,
                    "imsiList": [{ "iccid": "8944000000000000101", "imsi": "234101" }],
                    "status": [{ "status": "ACTIVE" }]
                },
                { "subscriberid": "102", "imsiList": [{ "ICCID": "8944000000000000102" }] },
                { "subscriberId": 103, "imsiList": [] },
                { "imsiList": [{ "iccid": "" }] }
            ]
        }
    });

    let SubscriberListing::Subscribers(subscribers) = decode_subscriber_list(&response) else {
        panic!("expected a subscriber list");
    };

    assert_eq!(subscribers.len(), 4);
    assert_eq!(subscribers[0].subscriber_id, Some(OcsId::from(101)));
    assert!(subscribers[0].is_active());
    assert_eq!(subscribers[1].subscriber_id, Some(OcsId::from("102")));
    assert_eq!(subscribers[1].iccid.as_deref(), Some("8944000000000000102"));
    assert!(!subscribers[1].is_active());
    assert_eq!(subscribers[2].iccid, None);
    assert_eq!(subscribers[3].subscriber_id, None);
    assert_eq!(subscribers[3].iccid, None);
}

#[test]
fn test_subscriber_list_shapes() {
    // Error payload without a list: nothing to report on
    let error = json!({ "status": { "code": 401, "msg": "Invalid token" } });
    assert_eq!(decode_subscriber_list(&error), SubscriberListing::Subscribers(vec![]));

    let null_list = json!({ "listSubscriber": { "subscriberList": null } });
    assert_eq!(decode_subscriber_list(&null_list), SubscriberListing::Subscribers(vec![]));

    let object_list = json!({ "listSubscriber": { "subscriberList": { "101": {} } } });
    assert_eq!(decode_subscriber_list(&object_list), SubscriberListing::Malformed);

    let raw = json!({ "listSubscriber": { "subscriberList": "maintenance" } });
    assert_eq!(decode_subscriber_list(&raw), SubscriberListing::Malformed);
}

#[test]
fn test_packages_in_both_spellings() {
    let response = json!({
        "listSubscriberPrepaidPackages": {
            "packages": [
                {
                    "subscriberprepaidpackageid": 9001,
                    "packageTemplate": {
                        "prepaidpackagetemplateid": 77,
                        "prepaidpackagetemplatename": "EU 5GB"
                    },
                    "cost": "4.50",
                    "resellercost": 2.25,
                    "useddatabyte": "1048576",
                    "pckdatabyte": 5368709120i64,
                    "tstartactivationutc": "2025-05-30 10:00:00",
                    "tsexpirationutc": "2025-06-29 10:00:00"
                },
                {
                    "subscriberPrepaidPackageId": 9002,
                    "packagetemplate": {
                        "prepaidPackageTemplateId": "78",
                        "prepaidPackageTemplateName": "Global 1GB"
                    },
                    "resellerCost": "1e-1",
                    "usedDataByte": 0,
                    "pckDataByte": 1073741824
                }
            ]
        }
    });

    let packages = decode_packages(&response);
    assert_eq!(packages.len(), 2);

    let first = &packages[0];
    assert_eq!(first.package_id, Some(OcsId::from(9001)));
    assert_eq!(first.template_id, Some(OcsId::from(77)));
    assert_eq!(first.template_name.as_deref(), Some("EU 5GB"));
    assert_eq!(first.subscriber_cost, number(dec!(4.50)));
    assert_eq!(first.reseller_cost, number(dec!(2.25)));
    assert_eq!(first.used_bytes, number(dec!(1048576)));
    assert_eq!(first.capacity_bytes, number(dec!(5368709120)));
    assert_eq!(first.expiry_date.as_deref(), Some("2025-06-29 10:00:00"));

    let second = &packages[1];
    assert_eq!(second.package_id, Some(OcsId::from(9002)));
    assert_eq!(second.template_id, Some(OcsId::from("78")));
    assert_eq!(second.template_name.as_deref(), Some("Global 1GB"));
    assert_eq!(second.subscriber_cost, None);
    assert_eq!(second.reseller_cost, number(dec!(0.1)));
    assert_eq!(second.used_bytes, number(dec!(0)));
    assert_eq!(second.activation_date, None);
}

#[test]
fn test_text_ids_and_unparseable_figures_are_kept() {
    let subscribers = json!({
        "listSubscriber": { "subscriberList": [{ "subscriberId": "SUB-42", "imsiList": [] }] }
    });
    let SubscriberListing::Subscribers(subscribers) = decode_subscriber_list(&subscribers) else {
        panic!("expected a subscriber list");
    };
    assert_eq!(subscribers[0].subscriber_id, Some(OcsId::from("SUB-42")));

    let packages = decode_packages(&json!({
        "listSubscriberPrepaidPackages": {
            "packages": [{
                "subscriberprepaidpackageid": "PKG-7",
                "packageTemplate": { "prepaidpackagetemplateid": "TPL-EU" },
                "useddatabyte": 1024.5,
                "cost": "N/A"
            }]
        }
    }));

    let package = &packages[0];
    assert_eq!(package.package_id, Some(OcsId::from("PKG-7")));
    assert_eq!(package.template_id, Some(OcsId::from("TPL-EU")));
    assert_eq!(package.used_bytes, number(dec!(1024.5)));
    assert_eq!(package.subscriber_cost, Some(Amount::Raw(json!("N/A"))));
}

#[test]
fn test_packages_missing_or_wrong_type() {
    assert!(decode_packages(&json!({})).is_empty());
    assert!(decode_packages(&json!({ "raw": "<html>502</html>" })).is_empty());
    assert!(decode_packages(&json!({ "listSubscriberPrepaidPackages": { "packages": {} } })).is_empty());
}

#[test]
fn test_usage_sums_quantity_aliases() {
    let response = json!({
        "subscriberUsageOverPeriod": {
            "usages": [
                { "quantity": 1000 },
                { "usedDataByte": "2000" },
                { "useddatabyte": 500.5 },
                { "quantity": null, "usedDataByte": 10 },
                { "quantity": "n/a" },
                {}
            ],
            "total": { "resellerCost": "0.30", "subscriberCost": 1.2 }
        }
    });

    let usage = UsagePeriod::from_response(&response);
    assert_eq!(usage.used_bytes, 3510.5);
    assert_eq!(usage.record_count, 6);
    assert_eq!(usage.reseller_cost, dec!(0.30));
    assert_eq!(usage.subscriber_cost, dec!(1.2));
}

#[test]
fn test_usage_singular_list_and_missing_totals() {
    let response = json!({
        "subscriberUsageOverPeriod": {
            "usage": [{ "quantity": 42 }]
        }
    });

    let usage = UsagePeriod::from_response(&response);
    assert_eq!(usage.used_bytes, 42.0);
    assert_eq!(usage.reseller_cost, dec!(0));
    assert_eq!(usage.subscriber_cost, dec!(0));
}

#[test]
fn test_usage_without_expected_shape_is_zero() {
    for response in [json!({}), json!({ "raw": "Service Unavailable" }), json!(null)] {
        let usage = UsagePeriod::from_response(&response);
        assert_eq!(usage, UsagePeriod::default());
    }
}

#[test]
fn test_last_usage_date() {
    let response = json!({ "getSingleSubscriber": { "lastUsageDate": "2025-06-09 23:10:00" } });
    assert_eq!(decode_last_usage_date(&response).as_deref(), Some("2025-06-09 23:10:00"));

    assert_eq!(decode_last_usage_date(&json!({ "getSingleSubscriber": {} })), None);
    assert_eq!(
        decode_last_usage_date(&json!({ "getSingleSubscriber": { "lastUsageDate": "" } })),
        None
    );
}
