use moviweb::config::{EnvConfig, OmdbConfig};
use moviweb::db::database_service::DatabaseService;
use std::sync::Arc;
use tempfile::TempDir;

pub mod client;

pub struct TestContext {
    pub db: Arc<DatabaseService>,
    _dir: TempDir,
}

impl TestContext {
    pub async fn new() -> TestContext {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = dir.path().join("test.db");
        let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

        let db = Arc::new(
            DatabaseService::new(&db_url)
                .await
                .expect("Failed to initialize DatabaseService"),
        );

        TestContext { db, _dir: dir }
    }
}

pub fn get_test_config() -> EnvConfig {
    EnvConfig {
        port: 8080,
        db_url: "test".to_string(), // Not used in tests
        omdb: OmdbConfig {
            api_key: "test".to_string(),
            endpoint: "http://localhost:1/".to_string(), // Never contacted
        },
    }
}

// Test data helpers
pub mod test_data {
    use moviweb::types::movie::{DBMovieCreate, RMovieCreate};
    use moviweb::types::user::RUserCreate;

    pub fn sample_user() -> RUserCreate {
        RUserCreate {
            name: "Test User".to_string(),
        }
    }

    pub fn sample_user_with_name(name: &str) -> RUserCreate {
        RUserCreate {
            name: name.to_string(),
        }
    }

    pub fn titanic() -> DBMovieCreate {
        DBMovieCreate {
            title: "Titanic".to_string(),
            director: "Di Caprio".to_string(),
            year: 1997,
            rating: 9.9,
        }
    }

    pub fn titanic_request() -> RMovieCreate {
        RMovieCreate {
            title: "Titanic".to_string(),
            director: Some("Di Caprio".to_string()),
            year: Some(1997),
            rating: Some(9.9),
        }
    }
}
