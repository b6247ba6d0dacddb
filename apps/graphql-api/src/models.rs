use std::sync::Arc;

use async_graphql::{Context, ID, Object, Result, SimpleObject};
use entities::{comment, link};
use services::{MovieDetailsRecord, MovieRecord};

use crate::service::Service;

pub struct Link {
    model: link::Model,
}

impl From<link::Model> for Link {
    fn from(model: link::Model) -> Self {
        Self { model }
    }
}

#[Object]
impl Link {
    async fn id(&self) -> ID {
        ID(self.model.id.to_string())
    }

    async fn description(&self) -> &str {
        &self.model.description
    }

    async fn url(&self) -> &str {
        &self.model.url
    }

    /// All comments posted under this link.
    async fn comments(&self, gql_ctx: &Context<'_>) -> Result<Vec<Comment>> {
        // TODO: batch these per-link lookups with a dataloader, a feed of N
        // links currently issues N comment queries.
        let service = gql_ctx.data_unchecked::<Arc<Service>>();
        service.comments_for_link(self.model.id).await
    }
}

#[derive(SimpleObject, Debug)]
pub struct Comment {
    pub id: ID,
    pub body: String,
}

impl From<comment::Model> for Comment {
    fn from(model: comment::Model) -> Self {
        Self {
            id: ID(model.id.to_string()),
            body: model.body,
        }
    }
}

#[derive(SimpleObject, Debug)]
#[graphql(rename_fields = "snake_case")]
pub struct Movie {
    pub id: i32,
    pub title: String,
    pub rating: f64,
    pub summary: String,
    pub language: String,
    pub medium_cover_image: String,
}

impl From<MovieRecord> for Movie {
    fn from(record: MovieRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            rating: record.rating,
            summary: record.summary,
            language: record.language,
            medium_cover_image: record.medium_cover_image,
        }
    }
}

#[derive(SimpleObject, Debug)]
#[graphql(rename_fields = "snake_case")]
pub struct MovieDetail {
    pub id: i32,
    pub title: String,
    pub rating: f64,
    pub description_full: String,
    pub language: String,
    pub medium_cover_image: String,
}

impl From<MovieDetailsRecord> for MovieDetail {
    fn from(record: MovieDetailsRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            rating: record.rating,
            description_full: record.description_full,
            language: record.language,
            medium_cover_image: record.medium_cover_image,
        }
    }
}
