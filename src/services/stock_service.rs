// src/services/stock_service.rs

use std::sync::Arc;

use crate::{
    common::error::AppError,
    models::stock::{StockItemView, StockLevel},
    upstream::StockSource,
};

#[derive(Clone)]
pub struct StockService {
    stock: Arc<dyn StockSource>,
}

impl StockService {
    pub fn new(stock: Arc<dyn StockSource>) -> Self {
        Self { stock }
    }

    /// Estoque com o nível calculado. Com `only_critical`, só o que está no limite ou abaixo.
    pub async fn levels(&self, only_critical: bool) -> Result<Vec<StockItemView>, AppError> {
        let items = self.stock.list_stock().await?;

        Ok(items
            .into_iter()
            .map(StockItemView::from)
            .filter(|view| !only_critical || view.level == StockLevel::Critical)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_fixtures::{stock_item, FixtureApi};

    #[tokio::test]
    async fn levels_are_attached_and_filterable() {
        let api = Arc::new(FixtureApi {
            stock: vec![stock_item(1, 50, 10), stock_item(2, 15, 10), stock_item(3, 2, 10)],
            ..FixtureApi::default()
        });
        let service = StockService::new(api);

        let all = service.levels(false).await.unwrap();
        let levels: Vec<StockLevel> = all.iter().map(|v| v.level).collect();
        assert_eq!(levels, [StockLevel::Healthy, StockLevel::Low, StockLevel::Critical]);

        let critical = service.levels(true).await.unwrap();
        assert_eq!(critical.len(), 1);
        assert_eq!(critical[0].item.id, 3);
    }
}
