//! Client-held catalog state and its transitions.
//!
//! `CatalogState` is mutated only through [`CatalogState::apply`]. The visible
//! list is never stored: it is recomputed from the full collection, the
//! current criteria, and the current sort key on every read.

use super::{Car, CarId, FilterCriteria, SortKey, filter, sort};

/// A completed step the view reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogEvent {
    /// Initial collection arrived from the backend.
    FetchCompleted(Vec<Car>),
    FilterChanged(FilterCriteria),
    SortChanged(SortKey),
    /// Backend accepted a like and returned the authoritative record.
    LikeSucceeded(Car),
    /// Backend accepted an unlike and returned the authoritative record.
    UnlikeSucceeded(Car),
    /// A fetch or like/unlike request failed. State is left as it was.
    RequestFailed,
}

/// What `apply` did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Applied,
    /// The event referenced a car this client does not hold.
    Ignored,
    Unchanged,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogState {
    all_cars: Vec<Car>,
    /// Liked cars in like order, at most one entry per id.
    liked: Vec<Car>,
    criteria: FilterCriteria,
    sort_key: SortKey,
}

impl CatalogState {
    pub fn new(criteria: FilterCriteria, sort_key: SortKey) -> Self {
        Self { criteria, sort_key, ..Self::default() }
    }

    pub fn apply(&mut self, event: CatalogEvent) -> Transition {
        match event {
            CatalogEvent::FetchCompleted(cars) => {
                self.liked = cars.iter().filter(|car| car.liked).cloned().collect();
                self.all_cars = cars;
                Transition::Applied
            }
            CatalogEvent::FilterChanged(criteria) => {
                self.criteria = criteria;
                Transition::Applied
            }
            CatalogEvent::SortChanged(sort_key) => {
                self.sort_key = sort_key;
                Transition::Applied
            }
            CatalogEvent::LikeSucceeded(car) | CatalogEvent::UnlikeSucceeded(car) => {
                self.merge(car)
            }
            CatalogEvent::RequestFailed => Transition::Unchanged,
        }
    }

    /// Replace the held copy of `car` and bring the liked set in line with it.
    fn merge(&mut self, car: Car) -> Transition {
        let Some(slot) = self.all_cars.iter_mut().find(|held| held.id == car.id) else {
            return Transition::Ignored;
        };
        *slot = car.clone();

        let position = self.liked.iter().position(|liked| liked.id == car.id);
        match (car.liked, position) {
            (true, Some(index)) => self.liked[index] = car,
            (true, None) => self.liked.push(car),
            (false, Some(index)) => {
                self.liked.remove(index);
            }
            (false, None) => {}
        }
        Transition::Applied
    }

    pub fn all_cars(&self) -> &[Car] {
        &self.all_cars
    }

    /// Cars currently marked liked, in the order they were liked.
    pub fn liked_cars(&self) -> &[Car] {
        &self.liked
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn visible_cars(&self) -> Vec<Car> {
        sort(&filter(&self.all_cars, &self.criteria), self.sort_key)
    }

    pub fn is_liked(&self, id: &CarId) -> bool {
        self.liked.iter().any(|car| &car.id == id)
    }

    pub fn contains(&self, id: &CarId) -> bool {
        self.all_cars.iter().any(|car| &car.id == id)
    }
}
