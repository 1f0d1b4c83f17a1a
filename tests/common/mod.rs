use jersey_customizer::config::EnvConfig;
use jersey_customizer::db::postgres_service::PostgresService;
use std::sync::Arc;
use tempfile::TempDir;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;

pub mod client;

pub struct TestContext {
    pub db: Arc<PostgresService>,
    pub static_dir: TempDir,
    pub _container: ContainerAsync<Postgres>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        let postgres = Postgres::default();
        let container = postgres
            .start()
            .await
            .expect("Failed to start postgres container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let db_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

        let db = Arc::new(
            PostgresService::new(&db_url)
                .await
                .expect("Failed to initialize PostgresService"),
        );

        let static_dir = TempDir::new().expect("Failed to create static dir");

        TestContext {
            db,
            static_dir,
            _container: container,
        }
    }

    #[allow(dead_code)]
    pub fn config(&self) -> EnvConfig {
        EnvConfig {
            port: 8080,
            db_url: "unused-in-tests".to_string(),
            session_key: None,
            cookie_secure: false,
            static_dir: self.static_dir.path().to_path_buf(),
            media_dir: self.static_dir.path().join("media"),
        }
    }

    /// Drop an image file into the pattern directory served to the customizer.
    #[allow(dead_code)]
    pub fn add_pattern(&self, file_name: &str) {
        let dir = self.static_dir.path().join("patterns");
        std::fs::create_dir_all(&dir).expect("Failed to create patterns dir");
        std::fs::write(dir.join(file_name), b"\x89PNG\r\n\x1a\n").expect("Failed to write pattern");
    }
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    use serde_json::{json, Value};

    pub fn sample_design() -> Value {
        json!({
            "name": "Falcons Home Kit",
            "jerseyType": "short-sleeve",
            "front": {
                "primaryColor": "#ff0000",
                "secondaryColor": "#ffffff",
                "textColor": "#000000",
                "number": "10",
                "pattern": "stripes",
                "logoUrl": null,
                "logoSize": 0.5
            },
            "back": {
                "primaryColor": "#ff0000",
                "secondaryColor": "#ffffff",
                "textColor": "#000000",
                "name": "SMITH",
                "number": "10",
                "pattern": "stripes",
                "logoUrl": null,
                "logoSize": 0.4
            }
        })
    }
}
