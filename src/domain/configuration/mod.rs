pub mod loader;
pub mod showroom_config;

pub use loader::{
    API_URL_ENV, CONFIG_FILE, default_config_path, load_config, parse_api_url,
    parse_config_content,
};
pub use showroom_config::{ApiConfig, FilterDefaults, ShowroomConfig};
