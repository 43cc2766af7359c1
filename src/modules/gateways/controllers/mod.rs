mod subscriber_controller;

pub use subscriber_controller::{configure, ListSubscribersQuery};
