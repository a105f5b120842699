//! Repositories mapping entities to relational rows.

pub mod articles;
pub mod users;

use sea_orm::{ConnectionTrait, EntityTrait, FromQueryResult, QueryTrait, Select};
use tracing::warn;

use crate::errors::domain::DomainError;
use crate::infra::db_errors::map_db_err;

pub use articles::{Article, ArticleRepository, NewArticle};
pub use users::{Credentials, NewUser, User, UserRepository};

/// Run `select` and decode each row independently.
///
/// A failing query is an error with no partial result. A row that fails to
/// decode is logged and skipped; the remaining rows are returned in query
/// order.
pub(crate) async fn fetch_decoded<E, C>(
    conn: &C,
    select: Select<E>,
) -> Result<Vec<E::Model>, DomainError>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    let table = E::default().table_name().to_owned();
    let stmt = select.build(conn.get_database_backend());
    let rows = conn.query_all(stmt).await.map_err(map_db_err)?;

    let mut models = Vec::with_capacity(rows.len());
    for row in rows {
        match E::Model::from_query_result(&row, "") {
            Ok(model) => models.push(model),
            Err(e) => warn!(table = %table, error = %e, "Skipping row that failed to decode"),
        }
    }
    Ok(models)
}
