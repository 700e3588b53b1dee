//! PostgreSQL post repository.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use wall_core::domain::{Post, PostQuery};
use wall_core::error::RepoError;
use wall_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};

/// SeaORM-backed implementation of [`PostRepository`].
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    async fn fetch(&self, id: Uuid) -> Result<Post, RepoError> {
        let model = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?
            .ok_or(RepoError::NotFound)?;

        Ok(model.into())
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn list(&self, query: PostQuery) -> Result<Vec<Post>, RepoError> {
        let mut select = PostEntity::find()
            .order_by_desc(post::Column::CreatedAt)
            .offset(query.offset())
            .limit(query.per_page);

        if let Some((start, end)) = query.window() {
            select = select
                .filter(post::Column::CreatedAt.gte(start))
                .filter(post::Column::CreatedAt.lt(end));
        }

        let models = select
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let result = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }

    async fn create(&self, post: Post) -> Result<Post, RepoError> {
        let active: post::ActiveModel = post.into();
        let model = active
            .insert(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(model.into())
    }

    async fn increment_clicks(&self, id: Uuid) -> Result<Post, RepoError> {
        // One atomic add-one in SQL. A read-modify-write here would lose
        // clicks under concurrency.
        let result = PostEntity::update_many()
            .col_expr(
                post::Column::ClickCount,
                Expr::col(post::Column::ClickCount).add(1),
            )
            .col_expr(post::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(post::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        if result.rows_affected == 0 {
            tracing::debug!(%id, "click increment matched no post");
            return Err(RepoError::NotFound);
        }

        self.fetch(id).await
    }

    async fn update_content(&self, id: Uuid, content: &str) -> Result<Post, RepoError> {
        let result = PostEntity::update_many()
            .col_expr(post::Column::Content, Expr::value(content.to_owned()))
            .col_expr(post::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(post::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        self.fetch(id).await
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}
