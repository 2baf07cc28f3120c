//! Catalog records, the filter and sort engines, and the client-held state.

mod car;
mod filter;
mod sort;
mod state;

pub use car::{Car, CarId};
pub use filter::{DEFAULT_MAX_PRICE, DEFAULT_MIN_PRICE, FilterCriteria, PriceRange, filter};
pub use sort::{SortKey, sort};
pub use state::{CatalogEvent, CatalogState, Transition};
