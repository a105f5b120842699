//! User repository.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use serde::Deserialize;
use tracing::debug;

use super::fetch_decoded;
use crate::entities::users;
use crate::errors::domain::DomainError;
use crate::infra::db_errors::map_db_err;

/// User domain model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub login: String,
    pub password: String,
}

/// Login/password pair submitted to registration and authentication.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    pub login: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("login", &self.login)
            .field("password", &"***")
            .finish()
    }
}

/// User row before the store assigns an id
pub type NewUser = Credentials;

#[derive(Debug, Clone)]
pub struct UserRepository {
    conn: DatabaseConnection,
}

impl UserRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// All users in insertion order.
    pub async fn select_all(&self) -> Result<Vec<User>, DomainError> {
        let select = users::Entity::find().order_by_asc(users::Column::Id);
        let rows = fetch_decoded(&self.conn, select).await?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    /// First user (by id) with exactly this login.
    pub async fn find_by_login(&self, login: &str) -> Result<Option<User>, DomainError> {
        let select = users::Entity::find()
            .filter(users::Column::Login.eq(login))
            .order_by_asc(users::Column::Id);
        let rows = fetch_decoded(&self.conn, select).await?;
        Ok(rows.into_iter().next().map(User::from))
    }

    /// Insert a user. A duplicate login rejected by the store surfaces as a
    /// `Conflict`.
    pub async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let active = users::ActiveModel {
            id: NotSet,
            login: Set(user.login),
            password: Set(user.password),
        };
        let model = active.insert(&self.conn).await.map_err(map_db_err)?;
        debug!(user_id = model.id, "user created");
        Ok(User::from(model))
    }

    pub async fn count(&self) -> Result<u64, DomainError> {
        users::Entity::find()
            .count(&self.conn)
            .await
            .map_err(map_db_err)
    }
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            login: model.login,
            password: model.password,
        }
    }
}
