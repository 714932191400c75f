use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer};
use sqlx::SqlitePool;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use club_service::config::Config;
use club_service::services::MediaStore;
use club_service::{db, handlers};

async fn health(pool: web::Data<SqlitePool>) -> HttpResponse {
    match sqlx::query("SELECT 1").fetch_one(pool.get_ref()).await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({
            "status": "ok",
            "service": "club-service",
            "version": env!("CARGO_PKG_VERSION")
        })),
        Err(e) => HttpResponse::ServiceUnavailable().json(serde_json::json!({
            "status": "unhealthy",
            "error": format!("database ping failed: {}", e),
            "service": "club-service"
        })),
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,club_service=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    let pool = db::init_pool(&config.database).await?;
    db::MIGRATOR.run(&pool).await?;

    let media_store = MediaStore::new(config.media.upload_dir.clone());

    tracing::info!(
        host = %config.app.host,
        port = config.app.port,
        env = %config.app.env,
        "starting club-service"
    );

    let bind_addr = (config.app.host.clone(), config.app.port);
    let app_config = config.clone();

    HttpServer::new(move || {
        let mut cors = Cors::default()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);
        for origin in app_config.cors.allowed_origins.split(',') {
            cors = cors.allowed_origin(origin.trim());
        }

        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(media_store.clone()))
            .app_data(web::Data::new(app_config.clone()))
            .wrap(TracingLogger::default())
            .wrap(cors)
            .route("/health", web::get().to(health))
            .configure(handlers::configure)
    })
    .bind(bind_addr)?
    .run()
    .await?;

    Ok(())
}
