use serde::{Deserialize, Serialize};

/// Body for `POST /users/{user_id}/movies`. Fields left out are filled from
/// the OMDb lookup before the insert.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RMovieCreate {
    pub title: String,
    pub director: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
}

/// Body for `PUT /movies/{movie_id}`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RMovieUpdate {
    pub title: String,
    pub director: String,
    pub year: i32,
    pub rating: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DBMovieCreate {
    pub title: String,
    pub director: String,
    pub year: i32,
    pub rating: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DBMovieUpdate {
    pub id: i32,
    pub title: String,
    pub director: String,
    pub year: i32,
    pub rating: f64,
}
