pub mod models;
pub mod services;

pub use models::{PrepaidPackage, Subscriber, SubscriberListing, UsagePeriod};
pub use services::SubscriberEnricher;
