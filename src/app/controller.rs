//! The single owner of catalog state.
//!
//! Every backend call is issued from here, exactly once per action. Request
//! failures are logged and swallowed: the view keeps showing its last state.

use crate::domain::{
    AppError, Car, CarId, CatalogEvent, CatalogState, FilterCriteria, PriceRange, SortKey,
    Transition,
};
use crate::ports::CatalogClient;

/// Result of a controller action that talks to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    Applied,
    /// The car is not held by this view, or the backend answered with a
    /// record this view does not hold. State is unchanged.
    Ignored,
    Failed,
}

/// Controller holding the catalog state and the backend client.
pub struct CatalogController<C: CatalogClient> {
    client: C,
    state: CatalogState,
}

impl<C: CatalogClient> CatalogController<C> {
    pub fn new(client: C) -> Self {
        Self { client, state: CatalogState::default() }
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn visible_cars(&self) -> Vec<Car> {
        self.state.visible_cars()
    }

    pub fn liked_cars(&self) -> &[Car] {
        self.state.liked_cars()
    }

    /// Fetch the full collection once.
    pub fn load(&mut self) -> RequestOutcome {
        match self.client.list_cars() {
            Ok(cars) => {
                tracing::info!(count = cars.len(), "fetched car collection");
                self.state.apply(CatalogEvent::FetchCompleted(cars));
                RequestOutcome::Applied
            }
            Err(err) => self.fail("Error fetching cars", err),
        }
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.state.apply(CatalogEvent::FilterChanged(criteria));
    }

    pub fn set_engine(&mut self, engine: Option<String>) {
        let criteria = FilterCriteria { engine, ..self.state.criteria().clone() };
        self.set_criteria(criteria);
    }

    pub fn set_body_type(&mut self, body_type: Option<String>) {
        let criteria = FilterCriteria { body_type, ..self.state.criteria().clone() };
        self.set_criteria(criteria);
    }

    pub fn set_price_range(&mut self, price_range: PriceRange) {
        let criteria = self.state.criteria().clone().with_price_range(price_range);
        self.set_criteria(criteria);
    }

    pub fn set_sort_key(&mut self, sort_key: SortKey) {
        self.state.apply(CatalogEvent::SortChanged(sort_key));
    }

    pub fn like(&mut self, id: &CarId) -> RequestOutcome {
        self.update_liked(id, true)
    }

    pub fn unlike(&mut self, id: &CarId) -> RequestOutcome {
        self.update_liked(id, false)
    }

    /// Unlike a car already in the liked set, like it otherwise.
    pub fn toggle_like(&mut self, id: &CarId) -> RequestOutcome {
        if self.state.is_liked(id) { self.unlike(id) } else { self.like(id) }
    }

    fn update_liked(&mut self, id: &CarId, liked: bool) -> RequestOutcome {
        if !self.state.contains(id) {
            tracing::warn!(%id, "car is not in the loaded catalog; no request sent");
            return RequestOutcome::Ignored;
        }

        let car = match self.client.set_liked(id, liked) {
            Ok(car) => car,
            Err(err) => return self.fail("Error updating car", err),
        };

        let event = if liked {
            CatalogEvent::LikeSucceeded(car)
        } else {
            CatalogEvent::UnlikeSucceeded(car)
        };
        match self.state.apply(event) {
            Transition::Ignored => {
                tracing::warn!(%id, "backend returned a car this view does not hold; ignoring");
                RequestOutcome::Ignored
            }
            _ => {
                tracing::info!(%id, liked, "car updated");
                RequestOutcome::Applied
            }
        }
    }

    fn fail(&mut self, context: &str, err: AppError) -> RequestOutcome {
        tracing::error!(error = %err, "{}", context);
        self.state.apply(CatalogEvent::RequestFailed);
        RequestOutcome::Failed
    }
}
