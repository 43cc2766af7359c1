pub mod ocs_id;
pub mod ocs_request;

pub use ocs_id::OcsId;
pub use ocs_request::{OcsRequest, SubscriberRef, UsagePeriodWindow};
