pub mod gateway_trait;
pub mod ocs_client;

pub use gateway_trait::OcsGateway;
pub use ocs_client::OcsClient;
