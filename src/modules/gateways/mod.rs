pub mod controllers;
pub mod models;
pub mod services;

pub use controllers::configure;
pub use models::{OcsId, OcsRequest};
pub use services::{OcsClient, OcsGateway};
