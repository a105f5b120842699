use actix_web::http::StatusCode;
use actix_web::{guard, web, HttpResponse};
use tracing::info;

use crate::error::AppError;
use crate::errors::ErrorMessage;
use crate::extractors::{ArticleId, ValidatedJson};
use crate::http::envelope::{respond, Message};
use crate::middleware::JwtGate;
use crate::repos::NewArticle;
use crate::state::app_state::AppState;

/// GET /api/v1/articles
async fn list_articles(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    info!("Get All Articles GET /api/v1/articles");

    let articles = state.storage.article().select_all().await.map_err(|e| {
        info!(error = %e, "Error occurred while Articles.SelectAll");
        AppError::not_implemented(ErrorMessage::StorageUnavailable)
    })?;

    Ok(respond(StatusCode::OK, &articles))
}

/// Ids outside the key range can name no stored article.
fn stored_key(id: ArticleId) -> Result<i32, AppError> {
    id.key().ok_or_else(|| {
        info!(article_id = id.0, "Can not find article with that ID in database");
        AppError::not_found(ErrorMessage::ArticleNotFound)
    })
}

/// GET /api/v1/articles/{id} (behind the token gate)
async fn get_article_by_id(
    id: ArticleId,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    info!(article_id = id.0, "Get Article by ID GET /api/v1/articles/{{id}}");
    let key = stored_key(id)?;

    let article = state
        .storage
        .article()
        .find_by_id(key)
        .await
        .map_err(|e| {
            info!(error = %e, "Trouble while accessing DB table(articles) with id");
            AppError::internal(ErrorMessage::StorageRetry)
        })?
        .ok_or_else(|| {
            info!(article_id = id.0, "Can not find article with that ID in database");
            AppError::not_found(ErrorMessage::ArticleNotFound)
        })?;

    Ok(respond(StatusCode::OK, &article))
}

/// DELETE /api/v1/articles/{id}
async fn delete_article_by_id(
    id: ArticleId,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    info!(article_id = id.0, "Delete Article by ID DELETE /api/v1/articles/{{id}}");
    let key = stored_key(id)?;
    let articles = state.storage.article();

    let existing = articles.find_by_id(key).await.map_err(|e| {
        info!(error = %e, "Trouble while accessing DB table(articles) with id");
        AppError::internal(ErrorMessage::StorageRetry)
    })?;
    if existing.is_none() {
        info!(article_id = id.0, "Can not find article with that ID in database");
        return Err(AppError::not_found(ErrorMessage::ArticleNotFound));
    }

    let deleted = articles.delete_by_id(key).await.map_err(|e| {
        info!(error = %e, "Trouble while deleting article from DB table(articles) with id");
        AppError::not_implemented(ErrorMessage::StorageRetry)
    })?;
    if deleted.is_none() {
        return Err(AppError::not_found(ErrorMessage::ArticleNotFound));
    }

    Ok(Message::confirmation(
        StatusCode::ACCEPTED,
        format!("Article with ID {} successfully deleted", id.0),
    )
    .into_response())
}

/// POST /api/v1/articles
async fn create_article(
    state: web::Data<AppState>,
    body: ValidatedJson<NewArticle>,
) -> Result<HttpResponse, AppError> {
    info!("Post Article POST /api/v1/articles");

    let article = state
        .storage
        .article()
        .create(body.into_inner())
        .await
        .map_err(|e| {
            info!(error = %e, "Trouble while creating new article");
            AppError::not_implemented(ErrorMessage::StorageCreate)
        })?;

    Ok(respond(StatusCode::CREATED, &article))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/articles")
            .route(web::get().to(list_articles))
            .route(web::post().to(create_article)),
    )
    .service(
        web::resource("/articles/{id}")
            .guard(guard::Get())
            .wrap(JwtGate)
            .route(web::get().to(get_article_by_id)),
    )
    .service(web::resource("/articles/{id}").route(web::delete().to(delete_article_by_id)));
}
