use actix_web::{web, App};
use moviweb::db::database_service::DatabaseService;
use moviweb::utils::omdb::OmdbClient;
use std::sync::Arc;

pub struct TestClient {
    pub db: Arc<DatabaseService>,
}

impl TestClient {
    pub fn new(db: Arc<DatabaseService>) -> Self {
        TestClient { db }
    }

    #[allow(dead_code)]
    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let omdb = OmdbClient::new(&super::get_test_config().omdb)
            .expect("Failed to build OMDb client");

        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .app_data(web::Data::new(omdb))
            .configure(moviweb::routes::configure_routes)
    }

    /// Seeds a user straight through the db layer and hands back its id.
    #[allow(dead_code)]
    pub async fn create_test_user(&self, name: &str) -> i32 {
        self.db
            .add_user(name)
            .await
            .expect("Failed to create test user")
            .id
    }
}
