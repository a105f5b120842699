//! Article repository.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::fetch_decoded;
use crate::entities::articles;
use crate::errors::domain::DomainError;
use crate::infra::db_errors::map_db_err;

/// Article domain model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub content: String,
}

/// Submitted article payload; any `id` in the body is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewArticle {
    pub title: String,
    pub author: String,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct ArticleRepository {
    conn: DatabaseConnection,
}

impl ArticleRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// All articles in insertion order.
    pub async fn select_all(&self) -> Result<Vec<Article>, DomainError> {
        let select = articles::Entity::find().order_by_asc(articles::Column::Id);
        let rows = fetch_decoded(&self.conn, select).await?;
        Ok(rows.into_iter().map(Article::from).collect())
    }

    /// First article with `id`, if any.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Article>, DomainError> {
        let select = articles::Entity::find()
            .filter(articles::Column::Id.eq(id))
            .order_by_asc(articles::Column::Id);
        let rows = fetch_decoded(&self.conn, select).await?;
        Ok(rows.into_iter().next().map(Article::from))
    }

    pub async fn create(&self, article: NewArticle) -> Result<Article, DomainError> {
        let active = articles::ActiveModel {
            id: NotSet,
            title: Set(article.title),
            author: Set(article.author),
            content: Set(article.content),
        };
        let model = active.insert(&self.conn).await.map_err(map_db_err)?;
        debug!(article_id = model.id, "article created");
        Ok(Article::from(model))
    }

    /// Delete the article with `id` and return its pre-deletion snapshot.
    ///
    /// Absent ids are a no-op returning `None`. The lookup and the DELETE are
    /// separate statements; if another caller deletes the row in between, the
    /// DELETE touches nothing and this also returns `None`.
    pub async fn delete_by_id(&self, id: i32) -> Result<Option<Article>, DomainError> {
        let Some(article) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let result = articles::Entity::delete_by_id(id)
            .exec(&self.conn)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            warn!(article_id = id, "article vanished between lookup and delete");
            return Ok(None);
        }

        debug!(article_id = id, "article deleted");
        Ok(Some(article))
    }

    pub async fn count(&self) -> Result<u64, DomainError> {
        articles::Entity::find()
            .count(&self.conn)
            .await
            .map_err(map_db_err)
    }
}

impl From<articles::Model> for Article {
    fn from(model: articles::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            author: model.author,
            content: model.content,
        }
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::ConnectionTrait;

    use super::*;
    use crate::config::db::StorageConfig;
    use crate::infra::db::connect_db;
    use crate::infra::schema::ensure_schema;

    async fn repo() -> ArticleRepository {
        let conn = connect_db(&StorageConfig::in_memory()).await.unwrap();
        ensure_schema(&conn).await.unwrap();
        ArticleRepository::new(conn)
    }

    fn payload(title: &str) -> NewArticle {
        NewArticle {
            title: title.to_string(),
            author: "au".to_string(),
            content: "c".to_string(),
        }
    }

    #[tokio::test]
    async fn select_all_returns_insertion_order() {
        let repo = repo().await;
        for title in ["first", "second", "third"] {
            repo.create(payload(title)).await.unwrap();
        }

        let titles: Vec<String> = repo
            .select_all()
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.title)
            .collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn select_all_skips_rows_that_fail_to_decode() {
        let repo = repo().await;
        repo.create(payload("good")).await.unwrap();
        // A BLOB title cannot decode into a String.
        repo.conn
            .execute_unprepared(
                "INSERT INTO articles (title, author, content) VALUES (X'FF', 'au', 'c')",
            )
            .await
            .unwrap();
        repo.create(payload("also good")).await.unwrap();

        let all = repo.select_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(repo.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn find_by_id_misses_return_none() {
        let repo = repo().await;
        assert_eq!(repo.find_by_id(42).await.unwrap(), None);
    }

    #[tokio::test]
    async fn delete_missing_is_noop() {
        let repo = repo().await;
        repo.create(payload("keep")).await.unwrap();

        assert_eq!(repo.delete_by_id(999).await.unwrap(), None);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn delete_existing_returns_snapshot_and_removes_one_row() {
        let repo = repo().await;
        let doomed = repo.create(payload("doomed")).await.unwrap();
        let survivor = repo.create(payload("survivor")).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 2);

        let deleted = repo.delete_by_id(doomed.id).await.unwrap();
        assert_eq!(deleted, Some(doomed.clone()));
        assert_eq!(repo.count().await.unwrap(), 1);

        assert_eq!(repo.find_by_id(doomed.id).await.unwrap(), None);
        assert_eq!(repo.select_all().await.unwrap(), vec![survivor]);
    }

    #[tokio::test]
    async fn query_failure_is_storage_error() {
        let repo = repo().await;
        repo.conn
            .execute_unprepared("DROP TABLE articles")
            .await
            .unwrap();

        let err = repo.select_all().await.unwrap_err();
        assert!(err.is_storage());
    }
}
