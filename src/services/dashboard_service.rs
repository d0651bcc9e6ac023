// src/services/dashboard_service.rs

use std::sync::Arc;

use chrono::NaiveDate;

use crate::{
    common::error::AppError,
    middleware::i18n::Locale,
    models::dashboard::{DashboardOverview, DashboardSummary, RevenueChartPoint, StatusCountEntry},
    services::aggregation,
    upstream::{CustomerSource, OrderSource, StockSource},
};

#[derive(Clone)]
pub struct DashboardService {
    orders: Arc<dyn OrderSource>,
    customers: Arc<dyn CustomerSource>,
    stock: Arc<dyn StockSource>,
}

impl DashboardService {
    pub fn new(
        orders: Arc<dyn OrderSource>,
        customers: Arc<dyn CustomerSource>,
        stock: Arc<dyn StockSource>,
    ) -> Self {
        Self { orders, customers, stock }
    }

    // Busca o snapshot de pedidos e agrega
    pub async fn summary(&self, reference: NaiveDate) -> Result<DashboardSummary, AppError> {
        let orders = self.orders.list_orders().await?;
        tracing::debug!("Agregando {} pedidos (referência {})", orders.len(), reference);
        Ok(aggregation::summarize(&orders, reference))
    }

    pub async fn revenue_chart(
        &self,
        reference: NaiveDate,
        locale: &Locale,
    ) -> Result<Vec<RevenueChartPoint>, AppError> {
        let summary = self.summary(reference).await?;

        Ok(summary
            .monthly_revenue
            .into_iter()
            .map(|entry| RevenueChartPoint {
                month: entry.month,
                label: locale.month_short(entry.month).to_string(),
                revenue: entry.revenue,
            })
            .collect())
    }

    pub async fn order_status(&self, reference: NaiveDate) -> Result<Vec<StatusCountEntry>, AppError> {
        Ok(self.summary(reference).await?.status_distribution)
    }

    // Os quatro cards do topo. As três listas são buscadas em paralelo.
    pub async fn overview(&self, reference: NaiveDate) -> Result<DashboardOverview, AppError> {
        let (orders, customers, restock) = tokio::try_join!(
            self.orders.list_orders(),
            self.customers.list_customers(),
            self.stock.list_restock(),
        )?;
        tracing::debug!(
            "Overview: {} pedidos, {} clientes, {} itens para repor",
            orders.len(),
            customers.len(),
            restock.len()
        );

        let summary = aggregation::summarize(&orders, reference);

        Ok(DashboardOverview {
            active_orders: summary.active_orders,
            total_customers: customers.len(),
            items_to_restock: restock.len(),
            monthly_revenue: summary.current_month_revenue,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_fixtures::{customer, order, stock_item, FixtureApi};
    use rust_decimal::Decimal;

    fn service(api: FixtureApi) -> DashboardService {
        let api = Arc::new(api);
        DashboardService::new(api.clone(), api.clone(), api)
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn overview_combines_the_three_sources() {
        let api = FixtureApi {
            orders: vec![
                order(1, "2024-03-05", "150.00", "PAYE"),
                order(2, "2024-03-06", "20", "EN_COURS"),
                order(3, "2024-02-06", "30", "PAYE"),
            ],
            customers: vec![customer(1, "1"), customer(2, "2")],
            restock: vec![stock_item(9, 1, 5)],
            ..FixtureApi::default()
        };

        let overview = service(api).overview(day(2024, 3, 15)).await.unwrap();

        assert_eq!(overview.active_orders, 1);
        assert_eq!(overview.total_customers, 2);
        assert_eq!(overview.items_to_restock, 1);
        assert_eq!(overview.monthly_revenue, "150.00".parse::<Decimal>().unwrap());
    }

    #[tokio::test]
    async fn revenue_chart_has_twelve_localized_points() {
        let api = FixtureApi {
            orders: vec![order(1, "2024-08-05", "10", "settled")],
            ..FixtureApi::default()
        };

        let chart = service(api)
            .revenue_chart(day(2024, 1, 1), &Locale("fr".to_string()))
            .await
            .unwrap();

        assert_eq!(chart.len(), 12);
        assert_eq!(chart[7].label, "août");
        assert_eq!(chart[7].revenue, Decimal::from(10));
        assert_eq!(chart[0].label, "janv.");
    }

    #[tokio::test]
    async fn upstream_failure_propagates() {
        let api = FixtureApi {
            fail_orders: true,
            ..FixtureApi::default()
        };

        let err = service(api).summary(day(2024, 1, 1)).await.unwrap_err();
        assert!(matches!(err, AppError::UpstreamStatus { status: 503, .. }));
    }
}
