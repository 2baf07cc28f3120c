//! showroom: browse, filter, sort, and like cars served by a showroom backend.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{CatalogView, LikeAction, ViewOptions};
pub use app::{CatalogController, RequestOutcome};
pub use domain::configuration::load_config;
pub use domain::{
    AppError, Car, CarId, CatalogEvent, CatalogState, FilterCriteria, PriceRange, ShowroomConfig,
    SortKey, Transition,
};
pub use ports::CatalogClient;
pub use services::HttpCatalogClient;

/// Fetch the catalog and return the filtered, sorted view.
pub fn browse(config: &ShowroomConfig, options: &ViewOptions) -> Result<CatalogView, AppError> {
    app::api::browse(config, options)
}

/// Fetch the catalog, like or unlike one car, and return the resulting view.
///
/// A failed like request is logged and reflected in [`CatalogView::request`];
/// it is not returned as an error.
pub fn update_like(
    config: &ShowroomConfig,
    id: &CarId,
    action: LikeAction,
    options: &ViewOptions,
) -> Result<CatalogView, AppError> {
    app::api::update_like(config, id, action, options)
}
