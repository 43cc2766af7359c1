pub mod fields;
pub mod prepaid_package;
pub mod subscriber;
pub mod usage_period;

pub use fields::Amount;
pub use prepaid_package::{decode_packages, PrepaidPackage};
pub use subscriber::{decode_last_usage_date, decode_subscriber_list, Subscriber, SubscriberListing};
pub use usage_period::UsagePeriod;
