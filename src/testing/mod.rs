mod fake_catalog_client;

pub use fake_catalog_client::{FakeCall, FakeCatalogClient};

use crate::domain::{Car, CarId};

/// The three-car collection used across controller tests.
pub fn sample_cars() -> Vec<Car> {
    vec![
        sample_car(1, "Jeep", "V8", "SUV", 50000.0),
        sample_car(2, "Honda", "V6", "Sedan", 20000.0),
        sample_car(3, "Tesla", "Electric", "Sports", 80000.0),
    ]
}

pub fn sample_car(id: u64, make: &str, engine: &str, body_type: &str, price: f64) -> Car {
    Car {
        id: CarId::from(id),
        make: make.to_string(),
        engine: engine.to_string(),
        body_type: body_type.to_string(),
        price,
        image_url: Some(format!("https://img.example/{id}.jpg")),
        liked: false,
    }
}
