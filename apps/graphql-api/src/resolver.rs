use std::sync::Arc;

use async_graphql::{Context, ID, Object, Result};

use crate::{
    models::{Comment, Link, Movie, MovieDetail},
    service::Service,
};

pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    async fn info(&self) -> &'static str {
        "This is the API of a Hackernews Clone"
    }

    async fn feed(
        &self,
        gql_ctx: &Context<'_>,
        filter_needle: Option<String>,
        skip: Option<u64>,
        take: Option<i32>,
    ) -> Result<Vec<Link>> {
        tracing::info!("GraphQL feed query");
        tracing::debug!("Needle: {:?}, skip: {:?}, take: {:?}", filter_needle, skip, take);
        let service = gql_ctx.data_unchecked::<Arc<Service>>();
        let result = service.feed(filter_needle, skip, take).await;
        match &result {
            Ok(links) => tracing::info!("Feed resolved {} links", links.len()),
            Err(e) => tracing::warn!("Feed query failed: {:?}", e.message),
        }
        result
    }

    async fn comment(&self, gql_ctx: &Context<'_>, id: ID) -> Result<Option<Comment>> {
        tracing::info!("GraphQL comment query for id {}", *id);
        let service = gql_ctx.data_unchecked::<Arc<Service>>();
        service.comment(id).await
    }

    async fn movies(
        &self,
        gql_ctx: &Context<'_>,
        limit: Option<i32>,
        rating: Option<f64>,
    ) -> Result<Vec<Option<Movie>>> {
        tracing::info!("GraphQL movies query");
        let service = gql_ctx.data_unchecked::<Arc<Service>>();
        service.movies(limit, rating).await
    }

    async fn movie(&self, gql_ctx: &Context<'_>, id: ID) -> Result<MovieDetail> {
        tracing::info!("GraphQL movie query for id {}", *id);
        let service = gql_ctx.data_unchecked::<Arc<Service>>();
        service.movie(id).await
    }

    #[graphql(name = "movie_suggestions")]
    async fn movie_suggestions(&self, gql_ctx: &Context<'_>, id: ID) -> Result<Vec<Option<Movie>>> {
        tracing::info!("GraphQL movie_suggestions query for id {}", *id);
        let service = gql_ctx.data_unchecked::<Arc<Service>>();
        service.movie_suggestions(id).await
    }
}

pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    async fn post_link(
        &self,
        gql_ctx: &Context<'_>,
        url: String,
        description: String,
    ) -> Result<Link> {
        tracing::info!("GraphQL postLink mutation for url {}", url);
        let service = gql_ctx.data_unchecked::<Arc<Service>>();
        service.post_link(url, description).await
    }

    async fn post_comment_on_link(
        &self,
        gql_ctx: &Context<'_>,
        link_id: ID,
        body: String,
    ) -> Result<Comment> {
        tracing::info!("GraphQL postCommentOnLink mutation for link {}", *link_id);
        let service = gql_ctx.data_unchecked::<Arc<Service>>();
        let result = service.post_comment_on_link(link_id, body).await;
        if let Err(e) = &result {
            tracing::warn!("postCommentOnLink failed: {:?}", e.message);
        }
        result
    }
}
