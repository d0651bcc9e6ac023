// src/handlers/dashboard.rs

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    common::{coerce::parse_reference_date, error::ApiError},
    config::AppState,
    middleware::i18n::Locale,
    models::dashboard::{DashboardOverview, DashboardSummary, RevenueChartPoint, StatusCountEntry},
};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ReferenceQuery {
    /// Data que define o mês/ano corrente (AAAA-MM-DD ou RFC 3339). Padrão: hoje.
    #[param(example = "2024-03-15")]
    pub reference_date: Option<String>,
}

impl ReferenceQuery {
    // O relógio só é lido aqui, na borda HTTP
    fn resolve(&self, locale: &Locale) -> Result<NaiveDate, ApiError> {
        match self.reference_date.as_deref() {
            Some(raw) if !raw.trim().is_empty() => {
                parse_reference_date(raw).map_err(|e| e.to_api_error(locale))
            }
            _ => Ok(chrono::Local::now().date_naive()),
        }
    }
}

// GET /api/dashboard/summary
#[utoipa::path(
    get,
    path = "/api/dashboard/summary",
    tag = "Dashboard",
    params(ReferenceQuery),
    responses(
        (status = 200, description = "Resumo agregado dos pedidos", body = DashboardSummary),
        (status = 400, description = "Data de referência inválida"),
        (status = 502, description = "API do restaurante indisponível")
    )
)]
pub async fn get_summary(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(query): Query<ReferenceQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let reference = query.resolve(&locale)?;

    let summary = app_state
        .dashboard_service
        .summary(reference)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(summary)))
}

// GET /api/dashboard/revenue-chart
#[utoipa::path(
    get,
    path = "/api/dashboard/revenue-chart",
    tag = "Dashboard",
    params(ReferenceQuery),
    responses(
        (status = 200, description = "Faturamento mês a mês do ano de referência", body = Vec<RevenueChartPoint>),
        (status = 400, description = "Data de referência inválida"),
        (status = 502, description = "API do restaurante indisponível")
    )
)]
pub async fn get_revenue_chart(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(query): Query<ReferenceQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let reference = query.resolve(&locale)?;

    let chart = app_state
        .dashboard_service
        .revenue_chart(reference, &locale)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(chart)))
}

// GET /api/dashboard/order-status
#[utoipa::path(
    get,
    path = "/api/dashboard/order-status",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Quantidade de pedidos por situação", body = Vec<StatusCountEntry>),
        (status = 502, description = "API do restaurante indisponível")
    )
)]
pub async fn get_order_status(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {
    // A distribuição não depende da data, qualquer referência serve
    let reference = chrono::Local::now().date_naive();

    let distribution = app_state
        .dashboard_service
        .order_status(reference)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(distribution)))
}

// GET /api/dashboard/overview
#[utoipa::path(
    get,
    path = "/api/dashboard/overview",
    tag = "Dashboard",
    params(ReferenceQuery),
    responses(
        (status = 200, description = "Cards do topo: pedidos ativos, clientes, reposição e faturamento do mês", body = DashboardOverview),
        (status = 400, description = "Data de referência inválida"),
        (status = 502, description = "API do restaurante indisponível")
    )
)]
pub async fn get_overview(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(query): Query<ReferenceQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let reference = query.resolve(&locale)?;

    let overview = app_state
        .dashboard_service
        .overview(reference)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(overview)))
}
