// src/models/dashboard.rs

use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

// 1. Faturamento de um mês do ano de referência
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRevenueEntry {
    #[schema(example = 2024)]
    pub year: i32,
    #[schema(example = 3)]
    pub month: u32, // 1..=12
    #[schema(example = "200.00")]
    pub revenue: Decimal,
}

// 2. Fatia do gráfico de pizza (pedidos por situação)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusCountEntry {
    #[schema(example = "settled")]
    pub status: String,
    #[schema(example = 3)]
    pub count: usize,
}

// 3. Resumo completo calculado a partir dos pedidos
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub reference_year: i32,
    pub reference_month: u32,
    pub active_orders: usize,
    pub monthly_revenue: Vec<MonthlyRevenueEntry>, // sempre 12 entradas, jan..dez
    pub status_distribution: Vec<StatusCountEntry>, // ordem de primeira aparição
    pub current_month_revenue: Decimal,
}

// 4. Ponto do gráfico de barras, com rótulo no idioma do cliente
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RevenueChartPoint {
    #[schema(example = 3)]
    pub month: u32,
    #[schema(example = "mars")]
    pub label: String,
    #[schema(example = "200.00")]
    pub revenue: Decimal,
}

// 5. Os cards do topo da tela inicial
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub active_orders: usize,
    pub total_customers: usize,
    pub items_to_restock: usize,
    pub monthly_revenue: Decimal,
}
