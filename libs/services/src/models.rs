use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Arguments accepted by the link feed, straight from the GraphQL layer.
#[derive(Debug, Default)]
pub struct FeedFilter {
    pub needle: Option<String>,
    pub skip: Option<u64>,
    pub take: Option<i32>,
}

/// Errors a feed operation can surface to a client. Everything that is not a
/// recognized user-facing condition stays a `Database` error and propagates
/// unchanged.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("'take' argument value '{value}' is outside the valid range of '{min}' to '{max}'")]
    TakeOutOfRange { value: i32, min: i32, max: i32 },
    #[error("Cannot parse id '{0}' as a numeric identifier")]
    InvalidId(String),
    #[error("Cannot post comment on non-existing link with id '{0}'.")]
    LinkNotFound(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: i32,
    pub title: String,
    pub rating: f64,
    pub summary: String,
    pub language: String,
    pub medium_cover_image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieDetailsRecord {
    pub id: i32,
    pub title: String,
    pub rating: f64,
    pub description_full: String,
    pub language: String,
    pub medium_cover_image: String,
}

pub mod providers {
    use nest_struct::nest_struct;

    use super::*;

    #[nest_struct]
    #[derive(Debug, Serialize, Deserialize)]
    pub struct MovieListResponse {
        pub status: String,
        pub status_message: String,
        pub data: nest! {
            pub movies: Option<Vec<MovieRecord>>,
        },
    }

    #[nest_struct]
    #[derive(Debug, Serialize, Deserialize)]
    pub struct MovieDetailsResponse {
        pub status: String,
        pub status_message: String,
        pub data: nest! {
            pub movie: MovieDetailsRecord,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::providers::{MovieDetailsResponse, MovieListResponse};

    #[test]
    fn movie_list_response_deserializes() {
        let payload = r#"{
            "status": "ok",
            "status_message": "Query was successful",
            "data": {
                "movie_count": 1,
                "limit": 20,
                "page_number": 1,
                "movies": [{
                    "id": 38659,
                    "title": "The Thing",
                    "rating": 8.2,
                    "summary": "A research team in Antarctica...",
                    "language": "en",
                    "medium_cover_image": "https://img.example/38659/medium.jpg",
                    "year": 1982
                }]
            }
        }"#;
        let response: MovieListResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(response.status, "ok");
        let movies = response.data.movies.unwrap();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].id, 38659);
        assert_eq!(movies[0].title, "The Thing");
    }

    #[test]
    fn movie_list_without_movies_field_is_empty() {
        let payload = r#"{
            "status": "ok",
            "status_message": "Query was successful",
            "data": { "movie_count": 0, "limit": 20, "page_number": 1 }
        }"#;
        let response: MovieListResponse = serde_json::from_str(payload).unwrap();
        assert!(response.data.movies.unwrap_or_default().is_empty());
    }

    #[test]
    fn movie_details_response_deserializes() {
        let payload = r#"{
            "status": "ok",
            "status_message": "Query was successful",
            "data": {
                "movie": {
                    "id": 10,
                    "title": "Blade Runner",
                    "rating": 8.1,
                    "description_full": "In the smog-choked dystopian Los Angeles...",
                    "language": "en",
                    "medium_cover_image": "https://img.example/10/medium.jpg"
                }
            }
        }"#;
        let response: MovieDetailsResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(response.data.movie.id, 10);
        assert_eq!(response.data.movie.language, "en");
    }
}
