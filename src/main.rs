//src/main.rs

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod common;
mod config;
mod docs;
mod handlers;
mod middleware;
mod models;
mod services;
mod upstream;

use crate::config::{AppState, Config};
use crate::docs::ApiDoc;

// Monta o router completo. Separado do main para os testes usarem o mesmo roteamento.
pub fn app(app_state: AppState) -> Router {
    let dashboard_routes = Router::new()
        .route("/summary", get(handlers::dashboard::get_summary))
        .route("/revenue-chart", get(handlers::dashboard::get_revenue_chart))
        .route("/order-status", get(handlers::dashboard::get_order_status))
        .route("/overview", get(handlers::dashboard::get_overview));

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/dashboard", dashboard_routes)
        .route("/api/stock", get(handlers::stock::list_stock_levels))
        .route("/api/customers", get(handlers::customers::list_customers))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // O painel roda em outra origem
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    // Se a configuração falhar, a aplicação não deve iniciar.
    let config = Config::from_env()?;
    let app_state = AppState::new(config)?;
    let addr = app_state.config.bind_addr.clone();

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr()?);

    axum::serve(listener, app(app_state)).await?;
    Ok(())
}
