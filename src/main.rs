mod cache;
mod config;
mod controllers;
mod database;
mod dto;
mod middleware;
mod models;
mod repositories;
mod routes;
mod search;
mod services;
mod state;
mod utils;

use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use cache::redis_client::RedisClient;
use cache::CacheConfig;
use config::environment::EnvironmentConfig;
use database::DatabaseConnection;
use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚗 Vehicle Classifieds - API");
    info!("============================");

    let config = EnvironmentConfig::default();

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let pool = db_connection.pool().clone();

    // Inicializar Redis (favoritos de visitantes)
    let redis_client = match RedisClient::new(CacheConfig::default()).await {
        Ok(client) => client,
        Err(e) => {
            error!("❌ Error conectando a Redis: {}", e);
            return Err(anyhow::anyhow!("Error de Redis: {}", e));
        }
    };

    // CORS: permisivo en desarrollo, orígenes fijos en producción
    let cors = if config.is_production() && !config.cors_origins.is_empty() {
        cors_middleware_with_origins(config.cors_origins.clone())
    } else {
        if config.is_development() {
            info!("🔧 Modo desarrollo: CORS permisivo");
        }
        cors_middleware()
    };

    let app_state = AppState::new(pool, config.clone(), redis_client);

    let app = Router::new()
        .route("/health", get(health_check))
        .nest(
            "/api/classifieds",
            routes::classified_routes::create_classified_router(),
        )
        .nest(
            "/api/taxonomy",
            routes::taxonomy_routes::create_taxonomy_router(app_state.clone()),
        )
        .nest(
            "/api/favourites",
            routes::favourites_routes::create_favourites_router(),
        )
        .nest("/api/auth", routes::auth_routes::create_auth_router())
        .merge(routes::customer_routes::create_customer_router())
        .layer(cors)
        .with_state(app_state);

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("📋 Classifieds:");
    info!("   GET  /api/classifieds - Listado con filtros y paginación");
    info!("   GET  /api/classifieds/count - Conteo con los mismos filtros");
    info!("   GET  /api/classifieds/aggregates - Extremos para los sliders");
    info!("   GET  /api/classifieds/latest - Últimos ingresos publicados");
    info!("   GET  /api/classifieds/:slug - Detalle (cuenta la vista)");
    info!("   GET  /api/classifieds/:slug/reserve - Paso del asistente de reserva");
    info!("📝 Formularios:");
    info!("   POST /api/reservations - Crear reserva");
    info!("   POST /api/subscribe - Alta en el boletín");
    info!("🌳 Taxonomía:");
    info!("   GET  /api/taxonomy - Dropdowns marca/modelo/variante");
    info!("   POST /api/taxonomy/sync - Sincronizar desde CSV (admin)");
    info!("❤️ Favoritos:");
    info!("   POST /api/favourites - Alternar favorito del visitante");
    info!("   GET  /api/favourites - Favoritos del visitante");
    info!("🔑 Auth:");
    info!("   POST /api/auth/sign-in - Acceso de administradores");

    // Iniciar servidor en background
    let server_handle = tokio::spawn(async move {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                error!("❌ Error del servidor: {}", e);
                e
            })
    });

    // Esperar a que el servidor termine
    if let Err(e) = server_handle.await? {
        error!("❌ Servidor terminó con error: {}", e);
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Health check simple
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "vehicle-classifieds-api",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal SIGTERM recibida, apagando servidor...");
        },
    }
}
