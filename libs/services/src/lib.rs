use entities::{
    comment, link,
    prelude::{Comment, Link},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, SqlErr,
};

mod models;
mod movies;
mod utils;

pub use models::{FeedError, FeedFilter, MovieDetailsRecord, MovieRecord};
pub use movies::MovieService;
pub use utils::{TAKE_DEFAULT, TAKE_MAX, TAKE_MIN, parse_int_safe};

use utils::apply_take_constraints;

/// Persistence operations for links and comments. Validation of user-supplied
/// arguments happens here, before any query reaches the store.
pub struct FeedService;

impl FeedService {
    pub async fn new() -> Self {
        Self
    }

    pub async fn feed(
        &self,
        filter: FeedFilter,
        db: &DatabaseConnection,
    ) -> Result<Vec<link::Model>, FeedError> {
        let take = apply_take_constraints(filter.take.unwrap_or(utils::TAKE_DEFAULT))?;
        let mut query = Link::find();
        if let Some(needle) = &filter.needle {
            query = query.filter(
                Condition::any()
                    .add(link::Column::Description.contains(needle.as_str()))
                    .add(link::Column::Url.contains(needle.as_str())),
            );
        }
        let links = query
            .order_by_asc(link::Column::Id)
            .offset(filter.skip)
            .limit(take as u64)
            .all(db)
            .await?;
        tracing::debug!("Feed query returned {} links", links.len());
        Ok(links)
    }

    pub async fn comment_by_id(
        &self,
        id: i32,
        db: &DatabaseConnection,
    ) -> Result<Option<comment::Model>, FeedError> {
        let comment = Comment::find_by_id(id).one(db).await?;
        Ok(comment)
    }

    pub async fn comments_for_link(
        &self,
        link_id: i32,
        db: &DatabaseConnection,
    ) -> Result<Vec<comment::Model>, FeedError> {
        let comments = Comment::find()
            .filter(comment::Column::LinkId.eq(link_id))
            .order_by_asc(comment::Column::Id)
            .all(db)
            .await?;
        Ok(comments)
    }

    pub async fn create_link(
        &self,
        url: String,
        description: String,
        db: &DatabaseConnection,
    ) -> Result<link::Model, FeedError> {
        let new_link = link::ActiveModel {
            url: Set(url),
            description: Set(description),
            ..Default::default()
        };
        let link = new_link.insert(db).await?;
        tracing::debug!("Created link {}", link.id);
        Ok(link)
    }

    /// Inserts a comment under `link_id`. A foreign key violation from the
    /// store means the link does not exist and is reported as `LinkNotFound`;
    /// any other store error propagates unchanged.
    pub async fn create_comment(
        &self,
        link_id: i32,
        body: String,
        db: &DatabaseConnection,
    ) -> Result<comment::Model, FeedError> {
        let new_comment = comment::ActiveModel {
            body: Set(body),
            link_id: Set(link_id),
            ..Default::default()
        };
        match new_comment.insert(db).await {
            Ok(comment) => {
                tracing::debug!("Created comment {} on link {}", comment.id, link_id);
                Ok(comment)
            }
            Err(err) => match err.sql_err() {
                Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                    Err(FeedError::LinkNotFound(link_id.to_string()))
                }
                _ => Err(FeedError::Database(err)),
            },
        }
    }
}
