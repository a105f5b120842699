use actix_web::{web, App, HttpServer};
use article_api::config::AppConfig;
use article_api::infra::state::build_state;
use article_api::middleware::StructuredLogger;
use article_api::routes;
use article_api::AppState;
use tracing::{error, info, warn};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    info!(host = %config.host, port = config.port, "Starting api server");

    let app_state = match build_state()
        .with_storage(config.storage.clone())
        .with_security(config.security.clone())
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "Failed to build application state");
            eprintln!("❌ Failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    let data = web::Data::new(app_state);
    let server_data = data.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(StructuredLogger)
            .app_data(server_data.clone())
            .configure(routes::configure)
            .default_service(web::to(routes::not_found))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    // Workers are gone; ours should be the last handle on the storage.
    let storage = std::sync::Arc::try_unwrap(data.into_inner())
        .ok()
        .and_then(AppState::into_storage);
    match storage {
        Some(storage) => {
            if let Err(e) = storage.close().await {
                error!(error = %e, "Failed to close database connection");
            }
        }
        None => warn!("storage still shared at shutdown; dropping without close"),
    }

    Ok(())
}
