pub mod catalog;
pub mod configuration;
pub mod error;

pub use catalog::{
    Car, CarId, CatalogEvent, CatalogState, FilterCriteria, PriceRange, SortKey, Transition,
};
pub use configuration::{ApiConfig, FilterDefaults, ShowroomConfig};
pub use error::AppError;
