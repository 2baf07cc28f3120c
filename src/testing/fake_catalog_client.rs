use std::sync::{Arc, Mutex};

use crate::domain::{AppError, Car, CarId};
use crate::ports::CatalogClient;

/// Recorded backend call.
#[derive(Debug, Clone, PartialEq)]
pub enum FakeCall {
    ListCars,
    SetLiked { id: CarId, liked: bool },
}

/// In-memory backend that behaves like the real service and can be told to fail.
#[derive(Clone, Default)]
pub struct FakeCatalogClient {
    pub cars: Arc<Mutex<Vec<Car>>>,
    pub calls: Arc<Mutex<Vec<FakeCall>>>,
    pub failing: Arc<Mutex<bool>>,
}

impl FakeCatalogClient {
    pub fn new(cars: Vec<Car>) -> Self {
        Self { cars: Arc::new(Mutex::new(cars)), ..Self::default() }
    }

    pub fn set_failing(&self, failing: bool) {
        *self.failing.lock().unwrap() = failing;
    }

    pub fn get_calls(&self) -> Vec<FakeCall> {
        self.calls.lock().unwrap().clone()
    }

    fn check_failing(&self, operation: &str) -> Result<(), AppError> {
        if *self.failing.lock().unwrap() {
            return Err(AppError::request_failed(operation, "simulated network error"));
        }
        Ok(())
    }
}

impl CatalogClient for FakeCatalogClient {
    fn list_cars(&self) -> Result<Vec<Car>, AppError> {
        self.calls.lock().unwrap().push(FakeCall::ListCars);
        self.check_failing("GET /cars")?;
        Ok(self.cars.lock().unwrap().clone())
    }

    fn set_liked(&self, id: &CarId, liked: bool) -> Result<Car, AppError> {
        self.calls.lock().unwrap().push(FakeCall::SetLiked { id: id.clone(), liked });
        let operation = format!("PUT /cars/{}", id);
        self.check_failing(&operation)?;

        let mut cars = self.cars.lock().unwrap();
        let car = cars
            .iter_mut()
            .find(|car| &car.id == id)
            .ok_or_else(|| AppError::request_failed(&operation, "HTTP 404: car not found"))?;
        car.liked = liked;
        Ok(car.clone())
    }
}
