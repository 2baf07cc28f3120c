//! Shared testing utilities for showroom CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const CARS_BODY: &str = r#"{"cars":[
    {"id":1,"make":"Jeep","engine":"V8","type":"SUV","price":50000,
     "imageUrl":"jeep.jpg","liked":false},
    {"id":2,"make":"Honda","engine":"V6","type":"Sedan","price":20000,
     "imageUrl":"honda.jpg","liked":false},
    {"id":3,"make":"Tesla","engine":"Electric","type":"Sports","price":80000,
     "imageUrl":"tesla.jpg","liked":false}
]}"#;

/// Testing harness providing an isolated working directory for CLI runs.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    pub server: mockito::ServerGuard,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root, server: mockito::Server::new() }
    }

    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for the compiled `showroom` binary pointed at the mock backend.
    pub fn cli(&self) -> Command {
        let mut cmd = self.bare_cli();
        cmd.args(["--api-url", &self.server.url()]);
        cmd
    }

    /// Build a command without any backend URL flag.
    pub fn bare_cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("showroom").expect("Failed to locate showroom binary");
        cmd.current_dir(self.work_dir())
            .env_remove("SHOWROOM_API_URL")
            .env_remove("RUST_LOG")
            .env_remove("SHOWROOM_LOG");
        cmd
    }

    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.work_dir().join("showroom.toml");
        fs::write(&path, content).expect("Failed to write config");
        path
    }

    pub fn mock_cars(&mut self) -> mockito::Mock {
        self.server
            .mock("GET", "/cars")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(CARS_BODY)
            .create()
    }

    pub fn mock_update(&mut self, id: u64, liked: bool, body: &str) -> mockito::Mock {
        self.server
            .mock("PUT", format!("/cars/{}", id).as_str())
            .match_body(mockito::Matcher::Json(serde_json::json!({ "liked": liked })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create()
    }
}
