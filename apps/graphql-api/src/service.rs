use async_graphql::{Error, ErrorExtensions, ID, Result};
use sea_orm::DatabaseConnection;
use services::{FeedError, FeedFilter, FeedService, MovieService, parse_int_safe};

use crate::models::{Comment, Link, Movie, MovieDetail};

pub struct Service {
    db: DatabaseConnection,
    feed: FeedService,
    movies: MovieService,
}

/// Attaches a machine-readable `code` extension to the user-visible message.
fn feed_error(err: FeedError) -> Error {
    let code = match &err {
        FeedError::TakeOutOfRange { .. } | FeedError::InvalidId(_) => "BAD_USER_INPUT",
        FeedError::LinkNotFound(_) => "NOT_FOUND",
        FeedError::Database(_) => "INTERNAL_SERVER_ERROR",
    };
    Error::new(err.to_string()).extend_with(|_, ext| ext.set("code", code))
}

impl Service {
    pub async fn new(db: DatabaseConnection, movie_api_url: String) -> Self {
        tracing::debug!("Initializing GraphQL API service");
        Self {
            feed: FeedService::new().await,
            movies: MovieService::new(movie_api_url).await,
            db,
        }
    }

    pub async fn feed(
        &self,
        filter_needle: Option<String>,
        skip: Option<u64>,
        take: Option<i32>,
    ) -> Result<Vec<Link>> {
        let filter = FeedFilter {
            needle: filter_needle,
            skip,
            take,
        };
        let links = self
            .feed
            .feed(filter, &self.db)
            .await
            .map_err(feed_error)?;
        Ok(links.into_iter().map(Link::from).collect())
    }

    pub async fn comment(&self, id: ID) -> Result<Option<Comment>> {
        let id = parse_int_safe(&id).ok_or_else(|| feed_error(FeedError::InvalidId(id.to_string())))?;
        let comment = self
            .feed
            .comment_by_id(id, &self.db)
            .await
            .map_err(feed_error)?;
        Ok(comment.map(Comment::from))
    }

    pub async fn comments_for_link(&self, link_id: i32) -> Result<Vec<Comment>> {
        let comments = self
            .feed
            .comments_for_link(link_id, &self.db)
            .await
            .map_err(feed_error)?;
        Ok(comments.into_iter().map(Comment::from).collect())
    }

    pub async fn post_link(&self, url: String, description: String) -> Result<Link> {
        let link = self
            .feed
            .create_link(url, description, &self.db)
            .await
            .map_err(feed_error)?;
        tracing::info!("Posted link {}", link.id);
        Ok(Link::from(link))
    }

    pub async fn post_comment_on_link(&self, link_id: ID, body: String) -> Result<Comment> {
        // Non-numeric ids are rejected before the store is ever consulted,
        // with the same message a foreign key violation produces.
        let Some(id) = parse_int_safe(&link_id) else {
            return Err(feed_error(FeedError::LinkNotFound(link_id.to_string())));
        };
        let comment = self
            .feed
            .create_comment(id, body, &self.db)
            .await
            .map_err(feed_error)?;
        Ok(Comment::from(comment))
    }

    pub async fn movies(&self, limit: Option<i32>, rating: Option<f64>) -> Result<Vec<Option<Movie>>> {
        let movies = self.movies.get_movies(limit, rating).await?;
        Ok(movies.into_iter().map(|m| Some(Movie::from(m))).collect())
    }

    pub async fn movie(&self, id: ID) -> Result<MovieDetail> {
        let id = parse_int_safe(&id).ok_or_else(|| feed_error(FeedError::InvalidId(id.to_string())))?;
        let movie = self.movies.get_movie(id).await?;
        Ok(MovieDetail::from(movie))
    }

    pub async fn movie_suggestions(&self, id: ID) -> Result<Vec<Option<Movie>>> {
        let id = parse_int_safe(&id).ok_or_else(|| feed_error(FeedError::InvalidId(id.to_string())))?;
        let movies = self.movies.get_suggestions(id).await?;
        Ok(movies.into_iter().map(|m| Some(Movie::from(m))).collect())
    }
}
