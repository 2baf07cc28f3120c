//! Conjunctive filtering of the car collection.

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

use super::Car;

pub const DEFAULT_MIN_PRICE: f64 = 0.0;
pub const DEFAULT_MAX_PRICE: f64 = 100_000.0;

/// Inclusive price bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    min: f64,
    max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Result<Self, AppError> {
        if !min.is_finite() || !max.is_finite() || min < 0.0 || min > max {
            return Err(AppError::InvalidPriceRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self { min: DEFAULT_MIN_PRICE, max: DEFAULT_MAX_PRICE }
    }
}

/// Current filter selection. Unset and empty category strings match everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub engine: Option<String>,
    pub body_type: Option<String>,
    pub price_range: PriceRange,
}

impl FilterCriteria {
    pub fn with_engine(mut self, engine: impl Into<String>) -> Self {
        self.engine = Some(engine.into());
        self
    }

    pub fn with_body_type(mut self, body_type: impl Into<String>) -> Self {
        self.body_type = Some(body_type.into());
        self
    }

    pub fn with_price_range(mut self, price_range: PriceRange) -> Self {
        self.price_range = price_range;
        self
    }

    pub fn matches(&self, car: &Car) -> bool {
        category_matches(self.engine.as_deref(), &car.engine)
            && category_matches(self.body_type.as_deref(), &car.body_type)
            && self.price_range.contains(car.price)
    }
}

fn category_matches(wanted: Option<&str>, actual: &str) -> bool {
    match wanted {
        Some(wanted) if !wanted.is_empty() => wanted == actual,
        _ => true,
    }
}

/// Returns the cars satisfying every active predicate, in input order.
pub fn filter(cars: &[Car], criteria: &FilterCriteria) -> Vec<Car> {
    cars.iter().filter(|car| criteria.matches(car)).cloned().collect()
}
