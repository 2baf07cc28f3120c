mod catalog_client_http;

pub use catalog_client_http::HttpCatalogClient;
