// src/handlers/stock.rs

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    common::error::ApiError,
    config::AppState,
    middleware::i18n::Locale,
    models::stock::StockItemView,
};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct StockQuery {
    /// Só os produtos no limite crítico ou abaixo
    #[serde(default)]
    pub critical_only: bool,
}

// GET /api/stock
#[utoipa::path(
    get,
    path = "/api/stock",
    tag = "Stock",
    params(StockQuery),
    responses(
        (status = 200, description = "Produtos com o nível de estoque calculado", body = Vec<StockItemView>),
        (status = 502, description = "API do restaurante indisponível")
    )
)]
pub async fn list_stock_levels(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(query): Query<StockQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let items = app_state
        .stock_service
        .levels(query.critical_only)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(items)))
}
