use std::env;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: i32,
    pub db_url: String,
    pub omdb: OmdbConfig,
}

#[derive(Clone, Debug)]
pub struct OmdbConfig {
    pub api_key: String,
    pub endpoint: String,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        EnvConfig {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            db_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://moviweb.db?mode=rwc".to_string()),
            omdb: OmdbConfig {
                api_key: env::var("OMDB_API_KEY").unwrap_or_default(),
                endpoint: env::var("OMDB_ENDPOINT")
                    .unwrap_or_else(|_| "http://www.omdbapi.com/".to_string()),
            },
        }
    }
}
