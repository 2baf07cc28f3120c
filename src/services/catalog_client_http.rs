//! Catalog backend client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{ApiConfig, AppError, Car, CarId};
use crate::ports::CatalogClient;

/// HTTP client for the showroom backend.
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    base_url: Url,
    client: Client,
}

impl HttpCatalogClient {
    /// Create a new HTTP client from API configuration.
    pub fn new(config: &ApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(config.timeout_secs.map(Duration::from_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { base_url: config.base_url.clone(), client })
    }

    fn cars_url(&self) -> Result<Url, AppError> {
        self.endpoint(&["cars"])
    }

    fn car_url(&self, id: &CarId) -> Result<Url, AppError> {
        self.endpoint(&["cars", id.as_str()])
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, AppError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::InvalidConfig(format!("Invalid base URL: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

#[derive(Debug, Deserialize)]
struct CarsEnvelope {
    cars: Vec<Car>,
}

#[derive(Debug, Deserialize)]
struct CarEnvelope {
    car: Car,
}

#[derive(Debug, Serialize)]
struct LikedUpdate {
    liked: bool,
}

impl CatalogClient for HttpCatalogClient {
    fn list_cars(&self) -> Result<Vec<Car>, AppError> {
        let operation = "GET /cars";
        let url = self.cars_url()?;
        tracing::debug!(%url, "fetching car collection");

        let response =
            self.client.get(url).send().map_err(|e| AppError::request_failed(operation, e))?;
        let envelope: CarsEnvelope = decode(operation, response)?;
        Ok(envelope.cars)
    }

    fn set_liked(&self, id: &CarId, liked: bool) -> Result<Car, AppError> {
        let operation = format!("PUT /cars/{}", id);
        let url = self.car_url(id)?;
        tracing::debug!(%url, liked, "updating liked flag");

        let response = self
            .client
            .put(url)
            .json(&LikedUpdate { liked })
            .send()
            .map_err(|e| AppError::request_failed(&operation, e))?;
        let envelope: CarEnvelope = decode(&operation, response)?;
        Ok(envelope.car)
    }
}

fn decode<T: DeserializeOwned>(operation: &str, response: Response) -> Result<T, AppError> {
    let status = response.status();

    if status.is_success() {
        response.json().map_err(|e| {
            AppError::request_failed(operation, format!("Failed to parse response: {}", e))
        })
    } else {
        let error_text = response.text().unwrap_or_else(|_| "Unknown error".to_string());
        Err(AppError::request_failed(
            operation,
            format!("HTTP {}: {}", status.as_u16(), error_text.trim()),
        ))
    }
}
