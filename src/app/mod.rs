pub mod api;
pub mod cli;
pub mod controller;
pub mod logging;

pub use controller::{CatalogController, RequestOutcome};
