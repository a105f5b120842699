//! Table bootstrap for the two entities.
//!
//! Creates `articles` and `users` when absent. There is no versioning: the
//! statements are idempotent and run on every `Storage::open`.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, Schema};
use tracing::debug;

use crate::entities::{articles, users};

pub async fn ensure_schema(conn: &DatabaseConnection) -> Result<(), DbErr> {
    create_table_if_missing(conn, articles::Entity).await?;
    create_table_if_missing(conn, users::Entity).await?;
    Ok(())
}

async fn create_table_if_missing<E: EntityTrait>(
    conn: &DatabaseConnection,
    entity: E,
) -> Result<(), DbErr> {
    let table = entity.table_name().to_owned();
    let backend = conn.get_database_backend();
    let schema = Schema::new(backend);
    let mut stmt = schema.create_table_from_entity(entity);
    stmt.if_not_exists();

    conn.execute(backend.build(&stmt)).await?;
    debug!(table = %table, "table ensured");
    Ok(())
}

#[cfg(test)]
mod tests {
    use sea_orm::{ActiveModelTrait, NotSet, Set};

    use super::*;
    use crate::config::db::StorageConfig;
    use crate::infra::db::connect_db;

    #[tokio::test]
    async fn test_ensure_schema_is_idempotent() {
        let conn = connect_db(&StorageConfig::in_memory()).await.unwrap();
        ensure_schema(&conn).await.unwrap();
        ensure_schema(&conn).await.unwrap();

        let row = articles::ActiveModel {
            id: NotSet,
            title: Set("t".into()),
            author: Set("a".into()),
            content: Set("c".into()),
        }
        .insert(&conn)
        .await
        .unwrap();
        assert!(row.id >= 1);
    }

    #[tokio::test]
    async fn test_users_login_is_unique() {
        let conn = connect_db(&StorageConfig::in_memory()).await.unwrap();
        ensure_schema(&conn).await.unwrap();

        let insert = |login: &str| users::ActiveModel {
            id: NotSet,
            login: Set(login.to_string()),
            password: Set("p".into()),
        };
        insert("dup").insert(&conn).await.unwrap();
        assert!(insert("dup").insert(&conn).await.is_err());
    }
}
