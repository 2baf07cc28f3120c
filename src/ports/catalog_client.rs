//! Catalog backend port definition.

use crate::domain::{AppError, Car, CarId};

/// Port for the backend that owns the car collection.
pub trait CatalogClient {
    /// Retrieve the full car collection in server order.
    fn list_cars(&self) -> Result<Vec<Car>, AppError>;

    /// Set the liked flag for one car and return the backend's updated record.
    fn set_liked(&self, id: &CarId, liked: bool) -> Result<Car, AppError>;
}
