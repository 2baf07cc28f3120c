//! Library API consumed by the CLI adapter.

use serde::Serialize;

use crate::app::controller::{CatalogController, RequestOutcome};
use crate::domain::{
    AppError, Car, CarId, FilterCriteria, FilterDefaults, PriceRange, ShowroomConfig, SortKey,
};
use crate::ports::CatalogClient;
use crate::services::HttpCatalogClient;

/// Filter and sort selection for one rendering of the catalog.
#[derive(Debug, Clone, Default)]
pub struct ViewOptions {
    pub engine: Option<String>,
    pub body_type: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub sort: SortKey,
}

impl ViewOptions {
    /// Resolve the criteria, falling back to configured price bounds.
    pub fn criteria(&self, defaults: &FilterDefaults) -> Result<FilterCriteria, AppError> {
        let price_range = PriceRange::new(
            self.min_price.unwrap_or(defaults.min_price),
            self.max_price.unwrap_or(defaults.max_price),
        )?;
        Ok(FilterCriteria {
            engine: self.engine.clone(),
            body_type: self.body_type.clone(),
            price_range,
        })
    }
}

/// Which like transition to request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeAction {
    Like,
    Unlike,
    Toggle,
}

/// A rendered snapshot of the catalog.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogView {
    /// Visible cars after filter and sort.
    pub cars: Vec<Car>,
    /// Ids in the liked set, in the order they were liked.
    pub liked: Vec<CarId>,
    /// Outcome of the like request, when one was made.
    #[serde(skip)]
    pub request: Option<RequestOutcome>,
}

impl CatalogView {
    fn capture<C: CatalogClient>(
        controller: &CatalogController<C>,
        request: Option<RequestOutcome>,
    ) -> Self {
        Self {
            cars: controller.visible_cars(),
            liked: controller.liked_cars().iter().map(|car| car.id.clone()).collect(),
            request,
        }
    }

    pub fn is_liked(&self, id: &CarId) -> bool {
        self.liked.contains(id)
    }
}

/// Fetch the catalog and render it with the given options.
pub fn browse(config: &ShowroomConfig, options: &ViewOptions) -> Result<CatalogView, AppError> {
    let client = HttpCatalogClient::new(&config.api)?;
    browse_with(client, &config.filter, options)
}

/// Fetch the catalog, apply one like transition, and render the result.
pub fn update_like(
    config: &ShowroomConfig,
    id: &CarId,
    action: LikeAction,
    options: &ViewOptions,
) -> Result<CatalogView, AppError> {
    let client = HttpCatalogClient::new(&config.api)?;
    update_like_with(client, &config.filter, id, action, options)
}

pub fn browse_with<C: CatalogClient>(
    client: C,
    defaults: &FilterDefaults,
    options: &ViewOptions,
) -> Result<CatalogView, AppError> {
    let controller = open(client, defaults, options)?;
    Ok(CatalogView::capture(&controller, None))
}

pub fn update_like_with<C: CatalogClient>(
    client: C,
    defaults: &FilterDefaults,
    id: &CarId,
    action: LikeAction,
    options: &ViewOptions,
) -> Result<CatalogView, AppError> {
    let mut controller = open(client, defaults, options)?;
    let outcome = match action {
        LikeAction::Like => controller.like(id),
        LikeAction::Unlike => controller.unlike(id),
        LikeAction::Toggle => controller.toggle_like(id),
    };
    Ok(CatalogView::capture(&controller, Some(outcome)))
}

fn open<C: CatalogClient>(
    client: C,
    defaults: &FilterDefaults,
    options: &ViewOptions,
) -> Result<CatalogController<C>, AppError> {
    let criteria = options.criteria(defaults)?;
    let mut controller = CatalogController::new(client);
    controller.load();
    controller.set_criteria(criteria);
    controller.set_sort_key(options.sort);
    Ok(controller)
}
