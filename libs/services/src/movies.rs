use anyhow::{Result, bail};
use reqwest::{Client, Url};

use crate::{
    models::{
        MovieDetailsRecord, MovieRecord,
        providers::{MovieDetailsResponse, MovieListResponse},
    },
    utils::get_base_http_client,
};

/// Read-only accessor for the external movie dataset. The dataset is served
/// over HTTP and is never written to from here.
pub struct MovieService {
    client: Client,
    base_url: String,
}

impl MovieService {
    pub async fn new(base_url: String) -> Self {
        let client = get_base_http_client(None);
        Self { client, base_url }
    }

    pub async fn get_movies(
        &self,
        limit: Option<i32>,
        rating: Option<f64>,
    ) -> Result<Vec<MovieRecord>> {
        let mut params = vec![];
        if let Some(limit) = limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(rating) = rating {
            params.push(("minimum_rating", rating.to_string()));
        }
        let url = Url::parse_with_params(&format!("{}/list_movies.json", self.base_url), &params)?;
        tracing::debug!("Fetching movie list from {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await?
            .json::<MovieListResponse>()
            .await?;
        if response.status != "ok" {
            bail!("movie provider returned status '{}'", response.status);
        }
        Ok(response.data.movies.unwrap_or_default())
    }

    pub async fn get_movie(&self, id: i32) -> Result<MovieDetailsRecord> {
        let url = Url::parse_with_params(
            &format!("{}/movie_details.json", self.base_url),
            &[("movie_id", id.to_string())],
        )?;
        tracing::debug!("Fetching movie details from {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await?
            .json::<MovieDetailsResponse>()
            .await?;
        if response.status != "ok" {
            bail!("movie provider returned status '{}'", response.status);
        }
        Ok(response.data.movie)
    }

    pub async fn get_suggestions(&self, id: i32) -> Result<Vec<MovieRecord>> {
        let url = Url::parse_with_params(
            &format!("{}/movie_suggestions.json", self.base_url),
            &[("movie_id", id.to_string())],
        )?;
        tracing::debug!("Fetching movie suggestions from {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await?
            .json::<MovieListResponse>()
            .await?;
        if response.status != "ok" {
            bail!("movie provider returned status '{}'", response.status);
        }
        Ok(response.data.movies.unwrap_or_default())
    }
}
