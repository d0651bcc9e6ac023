// src/docs.rs

use utoipa::OpenApi;
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Dashboard ---
        handlers::dashboard::get_summary,
        handlers::dashboard::get_revenue_chart,
        handlers::dashboard::get_order_status,
        handlers::dashboard::get_overview,

        // --- Stock ---
        handlers::stock::list_stock_levels,

        // --- Customers ---
        handlers::customers::list_customers,
    ),
    components(
        schemas(
            // --- DASHBOARD ---
            models::dashboard::DashboardSummary,
            models::dashboard::MonthlyRevenueEntry,
            models::dashboard::StatusCountEntry,
            models::dashboard::RevenueChartPoint,
            models::dashboard::DashboardOverview,

            // --- Orders ---
            models::orders::Order,

            // --- Stock ---
            models::stock::StockLevel,
            models::stock::StockItem,
            models::stock::StockItemView,

            // --- Customers ---
            models::customers::LoyaltyTier,
            models::customers::Customer,
            models::customers::CustomerView,
        )
    ),
    tags(
        (name = "Dashboard", description = "Indicadores e Gráficos Gerenciais"),
        (name = "Stock", description = "Níveis de Estoque"),
        (name = "Customers", description = "Clientes e Fidelidade")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/dashboard/summary",
            "/api/dashboard/revenue-chart",
            "/api/dashboard/order-status",
            "/api/dashboard/overview",
            "/api/stock",
            "/api/customers",
        ] {
            assert!(doc.paths.paths.contains_key(path), "faltando {}", path);
        }
    }
}
